// Interactive calculator session driven line by line

use crate::parse::parse_assignment;
use crate::render::{render_assessment, render_inputs, TextSink};
use encephal_core::{Calculator, CalculatorConfig};

const HELP: &[&str] = &[
    "commands: :help, :quit, :inputs, show, reset",
    "set an input with '<field> <value>', e.g. 'bilirubin 2.5' or 'alcohol yes'",
    "fields: alcohol (yes/no), bilirubin, creatinine, sofa (integer), urea",
];

pub struct ReplSession {
    calculator: Calculator,
    sink: TextSink,
}

impl ReplSession {
    pub fn new(config: CalculatorConfig) -> Self {
        let sink = TextSink::new(config.unknown_label.clone());
        let calculator = Calculator::with_config(config).with_sink(sink.clone());
        Self { calculator, sink }
    }

    pub fn prompt(&self) -> &'static str {
        "encephal> "
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Handle one line of input. Returns the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }

        let mut words = trimmed.split_whitespace();
        let head = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("reset" | "clear", []) => {
                self.calculator.reset();
                let mut out = render_inputs(self.calculator.input());
                out.extend(self.sink.drain());
                (out, false)
            }
            ("show", []) => {
                let label = &self.calculator.config().unknown_label;
                (render_assessment(&self.calculator.assess(), label), false)
            }
            (_, [value]) => (self.assign(head, value), false),
            (_, []) => (
                vec![format!("error: missing value, try '{head} <value>' or :help")],
                false,
            ),
            _ => (vec![format!("error: unrecognised input '{trimmed}'")], false),
        }
    }

    fn handle_command(&mut self, command: &str) -> (Vec<String>, bool) {
        match command {
            ":help" => (HELP.iter().map(|l| l.to_string()).collect(), false),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":inputs" => (render_inputs(self.calculator.input()), false),
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    fn assign(&mut self, name: &str, value: &str) -> Vec<String> {
        let update = match parse_assignment(name, value) {
            Ok(update) => update,
            Err(e) => return vec![format!("error: {e}")],
        };
        match self.calculator.apply(update) {
            Some(_) => self.sink.drain(),
            None => vec![format!("{} unchanged", update.field())],
        }
    }
}

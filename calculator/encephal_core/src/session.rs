// Calculator session: input state plus change-triggered recomputation

use crate::engine::RiskEngine;
use crate::input::{InputState, Update};
use crate::result::Assessment;
use encephal_config::CalculatorConfig;
use std::fmt;

/// Consumer of recomputed results, typically the presentation layer.
pub trait ResultSink {
    /// Called once per recomputation with both days' results.
    fn publish(&mut self, assessment: &Assessment);
}

impl<F> ResultSink for F
where
    F: FnMut(&Assessment),
{
    fn publish(&mut self, assessment: &Assessment) {
        self(assessment)
    }
}

/// One patient session.
///
/// Every setter that actually changes an input recomputes both days,
/// publishes the [`Assessment`] to the registered sink and returns it.
/// Setting a value equal to the stored one does nothing and returns `None`.
pub struct Calculator {
    input: InputState,
    engine: RiskEngine,
    sink: Option<Box<dyn ResultSink>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(RiskEngine::default())
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("input", &self.input)
            .field("engine", &self.engine)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Calculator {
    pub fn new(engine: RiskEngine) -> Self {
        Self {
            input: InputState::default(),
            engine,
            sink: None,
        }
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::new(RiskEngine::new(config))
    }

    /// Register the consumer of recomputed results, replacing any previous one.
    pub fn with_sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.set_sink(sink);
        self
    }

    pub fn set_sink(&mut self, sink: impl ResultSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.engine.config()
    }

    /// Results for the current inputs, without publishing them.
    pub fn assess(&self) -> Assessment {
        self.engine.assess(&self.input)
    }

    pub fn set_alcohol(&mut self, alcohol: bool) -> Option<Assessment> {
        self.apply(Update::Alcohol(alcohol))
    }

    pub fn set_bilirubin(&mut self, bilirubin: f64) -> Option<Assessment> {
        self.apply(Update::Bilirubin(bilirubin))
    }

    pub fn set_creatinine(&mut self, creatinine: f64) -> Option<Assessment> {
        self.apply(Update::Creatinine(creatinine))
    }

    pub fn set_sofa(&mut self, sofa: i32) -> Option<Assessment> {
        self.apply(Update::Sofa(sofa))
    }

    pub fn set_urea(&mut self, urea: f64) -> Option<Assessment> {
        self.apply(Update::Urea(urea))
    }

    /// Commit `update` and recompute both days if it changes the inputs.
    pub fn apply(&mut self, update: Update) -> Option<Assessment> {
        if !self.input.apply(update) {
            log::trace!("{} unchanged", update.field());
            return None;
        }
        log::debug!("setting {update}");
        Some(self.recompute())
    }

    /// Restore all inputs to their defaults and recompute once.
    pub fn reset(&mut self) -> Assessment {
        self.input.reset();
        log::debug!("inputs reset");
        self.recompute()
    }

    fn recompute(&mut self) -> Assessment {
        let assessment = self.engine.assess(&self.input);
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(&assessment);
        }
        assessment
    }
}

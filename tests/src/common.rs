use encephal_core::{Assessment, Calculator};
use std::cell::RefCell;
use std::rc::Rc;

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Records every assessment the calculator publishes.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Assessment>>>);

impl Recorder {
    pub fn attach(calc: Calculator) -> (Calculator, Recorder) {
        let recorder = Recorder::default();
        let sink = recorder.clone();
        let calc = calc.with_sink(move |a: &Assessment| sink.0.borrow_mut().push(a.clone()));
        (calc, recorder)
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn last(&self) -> Option<Assessment> {
        self.0.borrow().last().cloned()
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use mindreader::history::History;
use mindreader::models::context::{ContextModel, MODEL_MIN_EVIDENCE, MODEL_ORDER};
use mindreader::models::Model;
use mindreader::Symbol;

fuzz_target!(|data: &[u8]| {
    let mut model = ContextModel::<MODEL_ORDER, MODEL_MIN_EVIDENCE>::new();
    let mut hist = History::new();

    for byte in data {
        let sym = Symbol::from_bit(*byte);
        model.observe(&hist, sym);
        hist.push(sym);

        // The empty context counts every observation.
        assert_eq!(model.observations(), hist.len() as u64);
    }

    let _ = model.predict(&hist);
});

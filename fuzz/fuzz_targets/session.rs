#![no_main]

use libfuzzer_sys::fuzz_target;
use mindreader::session::Session;

fuzz_target!(|data: &[u8]| {
    let mut session = Session::new();

    for byte in data {
        // Predicting is a pure read.
        let before = session.predict_next();
        assert_eq!(session.predict_next(), before);

        if byte & 1 == 1 {
            session.record_white();
        } else {
            session.record_black();
        }
    }

    assert_eq!(session.len(), data.len());
    let _ = session.predict_next();
});

//! Domain-checked wrappers around the unchecked derivations.
//!
//! In-domain results are identical to the unchecked functions; the checks only
//! add a rejection path in front of them. Only the parameter domain is
//! checked: in single precision, a corner within about `1e-5 * fs` of Nyquist
//! still passes and can round to a marginally stable pole at `z = -1`.

use paste::paste;

use crate::biquad::{pass, shelf, Coefficients};
use crate::error::{Error, Result};
use crate::sample::FloatSample;

fn sample_period<X: FloatSample>(sample_period: X) -> Result<X> {
    if sample_period.is_finite() && sample_period > X::zero() {
        Ok(sample_period)
    } else {
        Err(Error::SamplePeriod(sample_period.as_f64()))
    }
}

fn freq<X: FloatSample>(sample_period: X, freq: X) -> Result<X> {
    let ratio = freq * sample_period;
    if freq.is_finite() && ratio > X::zero() && ratio < X::HALF {
        Ok(freq)
    } else {
        Err(Error::Frequency {
            freq: freq.as_f64(),
            nyquist: 0.5 / sample_period.as_f64(),
        })
    }
}

fn q<X: FloatSample>(q: X) -> Result<X> {
    if q.is_finite() && q > X::zero() {
        Ok(q)
    } else {
        Err(Error::Q(q.as_f64()))
    }
}

fn gain<X: FloatSample>(gain: X) -> Result<X> {
    if gain.is_finite() && gain > X::zero() {
        Ok(gain)
    } else {
        Err(Error::Gain(gain.as_f64()))
    }
}

/// Generates a `try_`-prefixed wrapper for each listed derivation. Parameters
/// after `freq` are checked by the function of the same name in this module.
macro_rules! checked {
    ($($module:ident::$name:ident($($param:ident),*);)*) => {
        paste! {
            $(
                #[doc = "Checked form of [`" $name "`](crate::biquad::" $name ")."]
                #[doc = ""]
                #[doc = "Rejects parameters outside the valid domain. This checks the domain"]
                #[doc = "only: in single precision, corners within about `1e-5 * fs` of"]
                #[doc = "Nyquist can still round to a marginally stable pole at `z = -1`."]
                pub fn [<try_ $name>]<X>(sample_period: X, freq: X $(, $param: X)*) -> Result<Coefficients<X>>
                where
                    X: FloatSample,
                {
                    let checked = || -> Result<Coefficients<X>> {
                        let sample_period = self::sample_period(sample_period)?;
                        let freq = self::freq(sample_period, freq)?;
                        $(let $param = self::$param($param)?;)*

                        Ok($module::$name(sample_period, freq $(, $param)*))
                    };

                    checked().map_err(|err| {
                        log::debug!("try_{}: {}", stringify!($name), err);
                        err
                    })
                }
            )*
        }
    };
}

checked! {
    pass::first_order_low_pass();
    pass::first_order_high_pass();
    pass::second_order_low_pass(q);
    pass::second_order_high_pass(q);
    shelf::first_order_low_shelf(gain);
    shelf::first_order_high_shelf(gain);
    shelf::second_order_low_shelf(q, gain);
    shelf::second_order_high_shelf(q, gain);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use approx::assert_abs_diff_eq;

    use crate::biquad::{self, test_util::pole_radius};

    // 32768 Hz, so that Nyquist is exact.
    const PERIOD: f64 = 1.0 / 32768.0;

    #[test]
    fn in_domain_matches_unchecked() {
        assert_eq!(
            try_first_order_low_pass(PERIOD, 440.0),
            Ok(biquad::first_order_low_pass(PERIOD, 440.0))
        );
        assert_eq!(
            try_second_order_high_pass(PERIOD, 80.0, 0.5),
            Ok(biquad::second_order_high_pass(PERIOD, 80.0, 0.5))
        );
        assert_eq!(
            try_first_order_high_shelf(1.0 / 44100.0f32, 8000.0, 0.5),
            Ok(biquad::first_order_high_shelf(1.0 / 44100.0f32, 8000.0, 0.5))
        );
        assert_eq!(
            try_second_order_low_shelf(PERIOD, 120.0, 0.707, 2.0),
            Ok(biquad::second_order_low_shelf(PERIOD, 120.0, 0.707, 2.0))
        );
    }

    #[test]
    fn rejects_sample_period() {
        for period in [0.0, -PERIOD, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                try_first_order_high_pass(period, 1000.0),
                Err(Error::SamplePeriod(_))
            ));
        }
    }

    #[test]
    fn rejects_frequency() {
        assert_eq!(
            try_second_order_low_pass(PERIOD, 16384.0, 1.0),
            Err(Error::Frequency {
                freq: 16384.0,
                nyquist: 16384.0,
            })
        );
        for freq in [0.0, -100.0, 20000.0, f64::NAN, f64::INFINITY] {
            assert!(try_first_order_low_shelf(PERIOD, freq, 2.0).is_err());
        }
        assert!(try_first_order_low_pass(PERIOD, 16383.0).is_ok());
    }

    #[test]
    fn rejects_q() {
        assert_eq!(
            try_second_order_high_pass(PERIOD, 1000.0, 0.0),
            Err(Error::Q(0.0))
        );
        assert_eq!(
            try_second_order_high_shelf(PERIOD, 1000.0, -1.0, 2.0),
            Err(Error::Q(-1.0))
        );
    }

    #[test]
    fn rejects_gain() {
        assert_eq!(
            try_first_order_low_shelf(PERIOD, 1000.0, 0.0),
            Err(Error::Gain(0.0))
        );
        assert_eq!(
            try_second_order_low_shelf(PERIOD, 1000.0, 1.0, -2.0),
            Err(Error::Gain(-2.0))
        );
    }

    #[test]
    fn checks_in_order() {
        // Every parameter is bad; the sample period is reported first.
        assert!(matches!(
            try_second_order_high_shelf(0.0, -1.0, 0.0, -1.0),
            Err(Error::SamplePeriod(_))
        ));
        assert!(matches!(
            try_second_order_high_shelf(PERIOD, -1.0, 0.0, -1.0),
            Err(Error::Frequency { .. })
        ));
        assert_eq!(
            try_second_order_high_shelf(PERIOD, 1000.0, 0.0, -1.0),
            Err(Error::Q(0.0))
        );
    }

    #[test]
    fn accepts_corner_next_to_nyquist() {
        // freq * T = 0.4999979 is in the domain, but cos(ω0) rounds to -1.
        let period = 1.0 / 48000.0f32;

        let c = try_first_order_low_pass(period, 23999.9).unwrap();
        assert_abs_diff_eq!(c.a1, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pole_radius(&c.cast()), 1.0, epsilon = 1e-3);

        let c = try_second_order_high_pass(period, 23999.9, 50.0).unwrap();
        assert_abs_diff_eq!(pole_radius(&c.cast()), 1.0, epsilon = 1e-3);
    }

    struct Capture(Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn logs_rejection() {
        // The logger can only be set once per process.
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Debug);

        let err = try_second_order_low_shelf(PERIOD, 1000.0, 1.0, -3.25).unwrap_err();
        assert_eq!(err, Error::Gain(-3.25));

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|line| line
            == "DEBUG try_second_order_low_shelf: linear gain must be finite and positive, got -3.25"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::Q(0.0).to_string(),
            "Q must be finite and positive, got 0"
        );
        assert_eq!(
            Error::Frequency {
                freq: 30000.0,
                nyquist: 24000.0
            }
            .to_string(),
            "frequency must lie strictly between 0 and 24000 Hz, got 30000"
        );
    }
}

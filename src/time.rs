use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDay, JDTOMJD, MJD};
use crate::heliotrace_errors::HeliotraceError;

/// Transformation from a date in the format YYYY-MM-DDTHH:MM:SS to modified julian date (MJD)
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-DDTHH:MM:SS (UTC)
///
/// Return
/// ------
/// * the input date as modified julian date (MJD)
pub fn date_to_mjd(date: &str) -> Result<MJD, HeliotraceError> {
    let epoch = Epoch::from_str(date)
        .map_err(|err| HeliotraceError::InvalidDateFormat(format!("{date}: {err}")))?;
    Ok(epoch.to_mjd_utc_days())
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDay {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDay) -> MJD {
    jd - JDTOMJD
}

/// Elapsed days between an element-set epoch and a target instant.
///
/// This is the `dt` handed to the propagator; negative values look backward
/// from the epoch.
pub fn days_since_epoch(epoch: MJD, t: MJD) -> f64 {
    t - epoch
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::constants::T2000;

    #[test]
    fn jd_mjd_round_trip() {
        let jd = 2460977.5;
        assert_abs_diff_eq!(mjd_to_jd(jd_to_mjd(jd)), jd, epsilon = 0.0);
        assert_abs_diff_eq!(jd_to_mjd(jd), 60977.0, epsilon = 0.0);
    }

    #[test]
    fn j2000_noon_is_t2000() {
        let mjd = date_to_mjd("2000-01-01T12:00:00").unwrap();
        // UTC vs TT offset is ~64 s; stay within a millidayish tolerance.
        assert_abs_diff_eq!(mjd, T2000, epsilon = 1e-3);
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(matches!(
            date_to_mjd("not-a-date"),
            Err(HeliotraceError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn days_since_epoch_is_signed() {
        assert_abs_diff_eq!(days_since_epoch(51544.5, 51547.0), 2.5, epsilon = 0.0);
        assert_abs_diff_eq!(days_since_epoch(51544.5, 51540.5), -4.0, epsilon = 0.0);
    }
}

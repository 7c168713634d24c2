//! 业务时区时间工具

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// 当前业务时区时间
pub fn business_now(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// 行记录时间戳 (业务时区)
pub fn record_timestamp(tz: Tz) -> String {
    shared::util::format_record_timestamp(&business_now(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_business_date_differs_from_utc_near_midnight() {
        // 2024-05-11 20:00 UTC is already 12 May in Kolkata (+05:30)
        let utc = Utc.with_ymd_and_hms(2024, 5, 11, 20, 0, 0).unwrap();
        let local = utc.with_timezone(&chrono_tz::Asia::Kolkata);
        assert_eq!(local.format("%d.%m.%y").to_string(), "12.05.24");
        assert_eq!(
            shared::util::format_record_timestamp(&local),
            "12-05-2024 01:30 AM"
        );
    }
}

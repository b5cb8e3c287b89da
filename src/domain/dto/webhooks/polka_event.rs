//! 결제 제공자(Polka) 웹훅 페이로드
use serde::{Deserialize, Serialize};

/// 사용자가 프리미엄으로 업그레이드되었음을 알리는 이벤트 이름
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// 웹훅 이벤트
///
/// ```json
/// { "event": "user.upgraded", "data": { "user_id": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaEvent {
    pub event: String,
    #[serde(default)]
    pub data: PolkaEventData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolkaEventData {
    /// 알 수 없는 이벤트에서는 비어 있을 수 있으므로 문자열로 받습니다.
    #[serde(default)]
    pub user_id: String,
}

impl PolkaEvent {
    pub fn is_user_upgraded(&self) -> bool {
        self.event == USER_UPGRADED_EVENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_event_is_recognized() {
        let event: PolkaEvent = serde_json::from_str(
            r#"{"event":"user.upgraded","data":{"user_id":"3311741c-680c-4546-99f3-fc9efac2036c"}}"#,
        )
        .unwrap();

        assert!(event.is_user_upgraded());
        assert_eq!(event.data.user_id, "3311741c-680c-4546-99f3-fc9efac2036c");
    }

    #[test]
    fn test_other_events_parse_without_data() {
        let event: PolkaEvent = serde_json::from_str(r#"{"event":"user.payment_failed"}"#).unwrap();

        assert!(!event.is_user_upgraded());
        assert!(event.data.user_id.is_empty());
    }
}

use super::*;

#[test]
fn role_wire_values() {
    // The backend calls requesters "user".
    assert_eq!(serde_json::to_string(&Role::Requester).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Volunteer).unwrap(), "\"volunteer\"");

    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::Requester);
    assert_eq!(role.to_string(), "requester");
}

#[test]
fn user_deserializes_without_phone_number() {
    let user: User = serde_json::from_str(
        r#"{"id":1,"username":"alice","email":"a@x.com","role":"volunteer"}"#,
    )
    .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Volunteer);
    assert!(user.phone_number.is_none());
}

#[test]
fn urgency_parse_falls_back_to_medium() {
    assert_eq!(UrgencyLevel::parse_or_default("low"), UrgencyLevel::Low);
    assert_eq!(UrgencyLevel::parse_or_default("high"), UrgencyLevel::High);
    assert_eq!(UrgencyLevel::parse_or_default("whatever"), UrgencyLevel::Medium);
    assert_eq!(UrgencyLevel::High.as_str(), "high");
}

#[test]
fn help_request_deserializes_backend_record() {
    let req: HelpRequest = serde_json::from_str(
        r#"{
            "id": 4,
            "title": "Water needed",
            "description": "Flooded area, no drinking water",
            "location": "Riverside",
            "urgency_level": "high",
            "created_at": "2024-09-01T10:30:00",
            "user_id": 2
        }"#,
    )
    .unwrap();
    assert_eq!(req.urgency_level, UrgencyLevel::High);
    assert!(req.photo.is_none());
}

#[test]
fn search_matches_any_text_field_case_insensitively() {
    let req = HelpRequest {
        id: 1,
        title: "Water needed".to_owned(),
        description: "Flooded area".to_owned(),
        location: "Riverside".to_owned(),
        urgency_level: UrgencyLevel::High,
        photo: None,
        created_at: "2024-09-01T10:30:00".to_owned(),
        user_id: 2,
    };
    assert!(req.matches_search(""));
    assert!(req.matches_search("WATER"));
    assert!(req.matches_search("flooded"));
    assert!(req.matches_search("river"));
    assert!(!req.matches_search("medicine"));
}

#[test]
fn new_request_reports_first_missing_field() {
    let mut fields = NewHelpRequest {
        title: "  ".to_owned(),
        ..NewHelpRequest::default()
    };
    assert_eq!(fields.missing_field(), Some("title"));

    fields.title = "Water".to_owned();
    assert_eq!(fields.missing_field(), Some("description"));

    fields.description = "No drinking water".to_owned();
    assert_eq!(fields.missing_field(), Some("location"));

    fields.location = "Riverside".to_owned();
    assert!(fields.missing_field().is_none());
}

use super::*;

#[test]
fn photo_url_joins_base_and_uploads_path() {
    assert_eq!(
        photo_url("7_house.jpg"),
        format!("{}/uploads/7_house.jpg", api_base_url())
    );
}

#[test]
fn rejection_message_is_shown_verbatim() {
    let err = ApiError::Rejected {
        status: 401,
        detail: "Incorrect password".to_owned(),
    };
    assert_eq!(err.user_message(), "Incorrect password");
    assert_eq!(err.to_string(), "rejected (401): Incorrect password");
}

#[test]
fn transport_message_suggests_retry() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}

use forward_extract::read;

fn forwarded_with_to(to_line: &str) -> forward_extract::ParseResult {
    let body = format!(
        "--- Forwarded Message ---\n\
         From: John Doe <john.doe@acme.com>\n\
         To: {to_line}\n\
         Subject: Integer consequat non purus\n\
         \n\
         body text"
    );
    read(&body, None)
}

#[test]
fn test_comma_separated_recipients() {
    let result = forwarded_with_to("Bessie Berry <bessie.berry@acme.com>, suzanne@globex.corp");

    assert_eq!(result.email.to.len(), 2);
    assert_eq!(result.email.to[0].name.as_deref(), Some("Bessie Berry"));
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
    assert_eq!(result.email.to[1].name, None);
    assert_eq!(
        result.email.to[1].address.as_deref(),
        Some("suzanne@globex.corp")
    );
}

#[test]
fn test_semicolon_separated_recipients() {
    let result = forwarded_with_to("Bessie Berry <bessie.berry@acme.com>; Nicholas <nicholas@globex.corp>");

    assert_eq!(result.email.to.len(), 2);
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
    assert_eq!(result.email.to[1].name.as_deref(), Some("Nicholas"));
    assert_eq!(
        result.email.to[1].address.as_deref(),
        Some("nicholas@globex.corp")
    );
}

#[test]
fn test_name_duplicating_address_is_dropped() {
    let result = forwarded_with_to("bessie.berry@acme.com <bessie.berry@acme.com>");

    assert_eq!(result.email.to.len(), 1);
    assert_eq!(result.email.to[0].name, None);
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
}

#[test]
fn test_invalid_address_becomes_name() {
    let result = forwarded_with_to("Bessie Berry <not-an-address>");

    assert_eq!(result.email.to.len(), 1);
    assert_eq!(result.email.to[0].address, None);
    assert_eq!(result.email.to[0].name.as_deref(), Some("not-an-address"));
}

#[test]
fn test_mailto_wrapper_is_unwrapped() {
    let result = forwarded_with_to("Bessie Berry <mailto:bessie.berry@acme.com>");

    assert_eq!(result.email.to.len(), 1);
    assert_eq!(result.email.to[0].name.as_deref(), Some("Bessie Berry"));
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
}

#[test]
fn test_quoted_display_name() {
    let result = forwarded_with_to("\"Berry, Bessie\" <bessie.berry@acme.com>");

    assert_eq!(result.email.to.len(), 1);
    assert_eq!(result.email.to[0].name.as_deref(), Some("Berry, Bessie"));
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
}

#[test]
fn test_bare_address_list() {
    let result = forwarded_with_to("bessie.berry@acme.com, suzanne@globex.corp");

    assert_eq!(result.email.to.len(), 2);
    assert!(result.email.to.iter().all(|mailbox| mailbox.name.is_none()));
    assert_eq!(
        result.email.to[1].address.as_deref(),
        Some("suzanne@globex.corp")
    );
}

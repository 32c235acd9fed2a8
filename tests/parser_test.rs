use forward_extract::read;

#[test]
fn test_forward_with_separator_line() {
    let body = "Praesent suscipit egestas.\n\
                \n\
                --- Forwarded Message ---\n\
                From: John Doe <john.doe@acme.com>\n\
                To: bessie.berry@acme.com\n\
                Subject: Integer consequat non purus\n\
                \n\
                body text";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Praesent suscipit egestas."));
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(result.email.from.name.as_deref(), Some("John Doe"));
    assert_eq!(result.email.to.len(), 1);
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
    assert_eq!(result.email.to[0].name, None);
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("body text"));
}

#[test]
fn test_forward_with_quoted_body() {
    // Apple Mail quotes the whole embedded message with "> " markers.
    let body = "FYI\n\
                \n\
                > Begin forwarded message:\n\
                > \n\
                > From: John Doe <john.doe@acme.com>\n\
                > Subject: Integer consequat non purus\n\
                > Date: 25 October 2021 at 11:17:21 CEST\n\
                > To: Bessie Berry <bessie.berry@acme.com>\n\
                > Cc: Walter Sheltan <walter.sheltan@acme.com>, Nicholas <nicholas@globex.corp>\n\
                > \n\
                > body text";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("FYI"));
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("25 October 2021 at 11:17:21 CEST")
    );
    assert_eq!(result.email.to[0].name.as_deref(), Some("Bessie Berry"));
    assert_eq!(
        result.email.cc[0].address.as_deref(),
        Some("walter.sheltan@acme.com")
    );
    assert_eq!(result.email.cc[0].name.as_deref(), Some("Walter Sheltan"));
    assert_eq!(
        result.email.cc[1].address.as_deref(),
        Some("nicholas@globex.corp")
    );
    assert_eq!(result.email.cc[1].name.as_deref(), Some("Nicholas"));
    assert_eq!(result.email.body.as_deref(), Some("body text"));
}

#[test]
fn test_from_line_fallback_requires_subject_confirmation() {
    // No separator line at all; the bare From: header is the only boundary.
    let body = "Praesent suscipit egestas.\n\
                \n\
                From: John Doe <john.doe@acme.com>\n\
                Sent: Tuesday, May 5, 2020 10:14 AM\n\
                To: bessie.berry@acme.com\n\
                Subject: Integer consequat non purus\n\
                \n\
                body text";

    let confirmed = read(body, Some("FW: Integer consequat non purus"));
    assert!(confirmed.forwarded);
    assert_eq!(
        confirmed.message.as_deref(),
        Some("Praesent suscipit egestas.")
    );
    assert_eq!(
        confirmed.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(
        confirmed.email.date.as_deref(),
        Some("Tuesday, May 5, 2020 10:14 AM")
    );
    assert_eq!(
        confirmed.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(confirmed.email.body.as_deref(), Some("body text"));

    // Without the subject confirmation the same body is too ambiguous.
    let unconfirmed = read(body, None);
    assert!(!unconfirmed.forwarded);
    assert!(unconfirmed.email.is_empty());
}

#[test]
fn test_separator_with_embedded_metadata() {
    // Outlook 2019 encodes author and date in the boundary line itself and
    // repeats no headers below it.
    let body = "Praesent suscipit egestas.\n\
                \n\
                On Tuesday, May 5, 2020 10:14 AM, \"John Doe\" <john.doe@acme.com> wrote:\n\
                \n\
                body text";

    let result = read(body, Some("FW: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Praesent suscipit egestas."));
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(result.email.from.name.as_deref(), Some("John Doe"));
    assert_eq!(
        result.email.date.as_deref(),
        Some("Tuesday, May 5, 2020 10:14 AM")
    );
    assert_eq!(result.email.body.as_deref(), Some("body text"));
    assert!(result.email.to.is_empty());
}

#[test]
fn test_nested_forward_reconciles_into_one_email() {
    let body = "outer note\n\
                \n\
                ---------- Forwarded message ---------\n\
                From: John Doe <john.doe@acme.com>\n\
                Subject: Integer consequat non purus\n\
                \n\
                intro text\n\
                \n\
                ---------- Forwarded message ---------\n\
                From: Bessie Berry <bessie.berry@acme.com>\n\
                Subject: inner subject\n\
                \n\
                inner body";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("outer note"));
    // The outermost sender and subject win.
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );

    // Both inner fragments survive, with no delimiter duplicated.
    let inner = result.email.body.unwrap();
    assert!(inner.starts_with("intro text"));
    assert!(inner.contains("inner body"));
    assert_eq!(inner.matches("Forwarded message").count(), 1);
    assert_eq!(inner.matches("Subject: inner subject").count(), 1);
}

#[test]
fn test_glued_headers_fall_back_to_lax_labels() {
    // Some clients put several header parts on one line; only the lax
    // patterns can pick the recipients out of it.
    let body = "----- Forwarded Message -----\n\
                From: John Doe <john.doe@acme.com> To: bessie.berry@acme.com Subject: Integer consequat non purus\n\
                \n\
                body text";

    let result = read(body, Some("Fwd: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(result.email.to.len(), 1);
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("body text"));
}

#[test]
fn test_subject_prefix_alone_confirms_forwarding() {
    let result = read("nothing recognizable in here", Some("Fwd: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert!(result.email.from.is_empty());
    assert!(result.email.body.is_none());
}

#[test]
fn test_plain_subject_skips_body_detection() {
    // A supplied subject without a forward prefix settles the question, even
    // when the body quotes a separator-looking line.
    let body = "as discussed:\n\
                \n\
                --- Forwarded Message ---\n\
                From: John Doe <john.doe@acme.com>\n\
                \n\
                body text";

    let result = read(body, Some("Integer consequat non purus"));

    assert!(!result.forwarded);
    assert_eq!(result.message, None);
    assert!(result.email.is_empty());
}

#[test]
fn test_no_match_yields_empty_result() {
    let result = read(
        "Aenean quis diam urna.\n\nMorbi in nisi tincidunt.",
        None,
    );

    assert!(!result.forwarded);
    assert_eq!(result.message, None);
    assert!(result.email.is_empty());
}

#[test]
fn test_crlf_bom_and_nbsp_are_normalized() {
    let body = "\u{FEFF}Praesent suscipit egestas.\r\n\
                \r\n\
                --- Forwarded Message ---\r\n\
                From: John\u{A0}Doe <john.doe@acme.com>\r\n\
                Subject: Integer consequat non purus\r\n\
                \r\n\
                body text\u{A0}\r\n";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Praesent suscipit egestas."));
    assert_eq!(result.email.from.name.as_deref(), Some("John Doe"));
    assert_eq!(result.email.body.as_deref(), Some("body text"));
}

#[test]
fn test_localized_separator_and_labels() {
    // German Apple Mail conventions end to end.
    let body = "Zur Kenntnisnahme\n\
                \n\
                Anfang der weitergeleiteten Nachricht:\n\
                \n\
                Von: John Doe <john.doe@acme.com>\n\
                Betreff: Integer consequat non purus\n\
                An: bessie.berry@acme.com\n\
                \n\
                body text";

    let result = read(body, Some("WG: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Zur Kenntnisnahme"));
    assert_eq!(
        result.email.from.address.as_deref(),
        Some("john.doe@acme.com")
    );
    assert_eq!(
        result.email.to[0].address.as_deref(),
        Some("bessie.berry@acme.com")
    );
    assert_eq!(result.email.body.as_deref(), Some("body text"));
}

//! Built-in pattern catalog data.
//!
//! Pure configuration: ordered pattern sources per category, covering the
//! separator lines, header labels and mailbox syntax of the mail clients and
//! locales the extractor knows about. The tables can grow freely without
//! touching the pipeline; ordering is significant only as the stable
//! tie-break of last resort (see `engine`).
//!
//! Inline `(?m)` / `(?i)` flags are part of each source so that the derived
//! line-capturing variants keep their semantics when wrapped in a group.

/// `>` runs on otherwise blank lines (Apple Mail, Missive)
pub const QUOTE_LINE_BREAK: &str = r"(?m)^(>+)\s?$";

/// `>` runs at the start of quoted lines (Apple Mail)
pub const QUOTE: &str = r"(?m)^(>+)\s?";

/// Four-space indent quoting (Outlook 2019)
pub const FOUR_SPACES: &str = r"(?m)^( {4})\s?";

/// CRLF and bare CR line endings
pub const CARRIAGE_RETURN: &str = r"\r\n?";

/// Byte order mark (Outlook 2019)
pub const BYTE_ORDER_MARK: &str = r"\x{FEFF}";

/// Trailing non-breaking space at line end (IONOS by 1 & 1)
pub const TRAILING_NON_BREAKING_SPACE: &str = r"(?m)\x{A0}$";

/// Any remaining non-breaking space
pub const NON_BREAKING_SPACE: &str = r"\x{A0}";

/// Forward prefixes on the subject line
pub const SUBJECT: &[&str] = &[
    r"(?m)^Fw:(.*)",
    r"(?m)^VS:(.*)",
    r"(?m)^WG:(.*)",
    r"(?m)^RV:(.*)",
    r"(?m)^TR:(.*)",
    r"(?m)^I:(.*)",
    r"(?m)^FW:(.*)",
    r"(?m)^Vs:(.*)",
    r"(?m)^PD:(.*)",
    r"(?m)^ENC:(.*)",
    r"(?m)^Redir.:(.*)",
    r"(?m)^VB:(.*)",
    r"(?m)^VL:(.*)",
    r"(?m)^Videresend:(.*)",
    r"(?m)^İLT:(.*)",
    r"(?m)^Fwd:(.*)",
];

/// Explicit forward-boundary lines
pub const SEPARATOR: &[&str] = &[
    // Apple Mail (per locale)
    r"(?m)^>?\s*Begin forwarded message\s?:",
    r"(?m)^>?\s*Začátek přeposílané zprávy\s?:",
    r"(?m)^>?\s*Start på videresendt besked\s?:",
    r"(?m)^>?\s*Anfang der weitergeleiteten Nachricht\s?:",
    r"(?m)^>?\s*Inicio del mensaje reenviado\s?:",
    r"(?m)^>?\s*Välitetty viesti alkaa\s?:",
    r"(?m)^>?\s*Début du message réexpédié\s?:",
    r"(?m)^>?\s*Début du message transféré\s?:",
    r"(?m)^>?\s*Započni proslijeđenu poruku\s?:",
    r"(?m)^>?\s*Továbbított levél kezdete\s?:",
    r"(?m)^>?\s*Inizio messaggio inoltrato\s?:",
    r"(?m)^>?\s*Begin doorgestuurd bericht\s?:",
    r"(?m)^>?\s*Videresendt melding\s?:",
    r"(?m)^>?\s*Początek przekazywanej wiadomości\s?:",
    r"(?m)^>?\s*Início da mensagem reencaminhada\s?:",
    r"(?m)^>?\s*Início da mensagem encaminhada\s?:",
    r"(?m)^>?\s*Începe mesajul redirecționat\s?:",
    r"(?m)^>?\s*Начало переадресованного сообщения\s?:",
    r"(?m)^>?\s*Začiatok preposlanej správy\s?:",
    r"(?m)^>?\s*Vidarebefordrat mejl\s?:",
    r"(?m)^>?\s*İleti başlangıcı\s?:",
    r"(?m)^>?\s*Початок листа, що пересилається\s?:",
    // Gmail (all locales), Missive, HubSpot (en)
    r"(?m)^\s*-{8,10}\s*Forwarded message\s*-{8,10}\s*",
    // Outlook Live / 365 (all locales)
    r"(?m)^\s*_{32}\s*$",
    // Mailmate
    r"(?m)^\s?Forwarded message:",
    // Outlook 2019 (per locale)
    r"(?m)^\s?Dne\s?.+,\s?.+\s*[\[|<].+[\]|>]\s?napsal\(a\)\s?:",
    r#"(?m)^\s?D.\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?:"#,
    r#"(?m)^\s?Am\s?.+\s?schrieb\s?".+"\s*[\[|<].+[\]|>]\s?:"#,
    r#"(?m)^\s?On\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?wrote\s?:"#,
    r#"(?m)^\s?El\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escribió\s?:"#,
    r"(?m)^\s?Le\s?.+,\s?«.+»\s*[\[|<].+[\]|>]\s?a écrit\s?:",
    r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?kirjoitti\s?.+\s?:",
    r"(?m)^\s?.+\s?időpontban\s?.+\s*[\[|<|(].+[\]|>|)]\s?ezt írta\s?:",
    r#"(?m)^\s?Il giorno\s?.+\s?".+"\s*[\[|<].+[\]|>]\s?ha scritto\s?:"#,
    r"(?m)^\s?Op\s?.+\s?heeft\s?.+\s*[\[|<].+[\]|>]\s?geschreven\s?:",
    r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?skrev følgende den\s?.+\s?:",
    r"(?m)^\s?Dnia\s?.+\s?„.+”\s*[\[|<].+[\]|>]\s?napisał\s?:",
    r#"(?m)^\s?Em\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escreveu\s?:"#,
    r#"(?m)^\s?.+\s?пользователь\s?".+"\s*[\[|<].+[\]|>]\s?написал\s?:"#,
    r"(?m)^\s?.+\s?používateľ\s?.+\s*\([\[|<].+[\]|>]\)\s?napísal\s?:",
    r#"(?m)^\s?Den\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?följande\s?:"#,
    r#"(?m)^\s?".+"\s*[\[|<].+[\]|>],\s?.+\s?tarihinde şunu yazdı\s?:"#,
    // Yahoo Mail, Thunderbird, HubSpot dashed separators (per locale)
    r"(?m)^\s*-{5,8} Přeposlaná zpráva -{5,8}\s*",
    r"(?m)^\s*-{5,8} Videresendt meddelelse -{5,8}\s*",
    r"(?m)^\s*-{5,10} Weitergeleitete Nachricht -{5,10}\s*",
    r"(?m)^\s*-{3,10} Forwarded Message -{3,10}\s*",
    r"(?m)^\s*-{5,10} Mensaje reenviado -{5,10}\s*",
    r"(?m)^\s*-{5,10} Edelleenlähetetty viesti -{5,10}\s*",
    r"(?m)^\s*-{5} Message transmis -{5}\s*",
    r"(?m)^\s*-{5,8} Továbbított üzenet -{5,8}\s*",
    r"(?m)^\s*-{5,10} Messaggio inoltrato -{5,10}\s*",
    r"(?m)^\s*-{5,10} Doorgestuurd bericht -{5,10}\s*",
    r"(?m)^\s*-{5,8} Videresendt melding -{5,8}\s*",
    r"(?m)^\s*-{5} Przekazana wiadomość -{5}\s*",
    r"(?m)^\s*-{5,8} Mensagem reencaminhada -{5,8}\s*",
    r"(?m)^\s*-{5,10} Mensagem encaminhada -{5,10}\s*",
    r"(?m)^\s*-{5,8} Mesaj redirecționat -{5,8}\s*",
    r"(?m)^\s*-{5} Пересылаемое сообщение -{5}\s*",
    r"(?m)^\s*-{5} Preposlaná správa -{5}\s*",
    r"(?m)^\s*-{5,10} Vidarebefordrat meddelande -{5,10}\s*",
    r"(?m)^\s*-{5} İletilmiş Mesaj -{5}\s*",
    r"(?m)^\s*-{5} Перенаправлене повідомлення -{5}\s*",
    r"(?m)^\s*-{8} Välitetty viesti / Fwd.Msg -{8}\s*",
    r"(?m)^\s*-{8,10} Message transféré -{8,10}\s*",
    r"(?m)^\s*-{8} Proslijeđena poruka -{8}\s*",
    r"(?m)^\s*-{8} Messaggio Inoltrato -{8}\s*",
    r"(?m)^\s*-{3} Treść przekazanej wiadomości -{3}\s*",
    r"(?m)^\s*-{8} Перенаправленное сообщение -{8}\s*",
    r"(?m)^\s*-{8} Preposlaná správa --- Forwarded Message -{8}\s*",
    r"(?m)^\s*-{8} İletilen İleti -{8}\s*",
    r"(?m)^\s*-{8} Переслане повідомлення -{8}\s*",
    r"(?m)^\s*-{9,10} メッセージを転送 -{9,10}\s*",
    r"(?m)^\s*-{9,10} Wiadomość przesłana dalej -{9,10}\s*",
    // IONOS by 1 & 1
    r"(?m)^>?\s*-{10} Original Message -{10}\s*",
];

/// Boundary lines that also carry the original sender and date inline
/// (Outlook 2019). Group order varies per locale, hence the named groups.
pub const SEPARATOR_WITH_INFORMATION: &[&str] = &[
    r"(?m)^\s?Dne\s?(?<date>.+),\s?(?<from_name>.+)\s*[\[|<](?<from_address>.+)[\]|>]\s?napsal\(a\)\s?:",
    r#"(?m)^\s?D.\s?(?<date>.+)\s?skrev\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?:"#,
    r#"(?m)^\s?Am\s?(?<date>.+)\s?schrieb\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?:"#,
    r#"(?m)^\s?On\s?(?<date>.+),\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?wrote\s?:"#,
    r#"(?m)^\s?El\s?(?<date>.+),\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?escribió\s?:"#,
    r"(?m)^\s?Le\s?(?<date>.+),\s?«(?<from_name>.+)»\s*[\[|<](?<from_address>.+)[\]|>]\s?a écrit\s?:",
    r"(?m)^\s?(?<from_name>.+)\s*[\[|<](?<from_address>.+)[\]|>]\s?kirjoitti\s?(?<date>.+)\s?:",
    r"(?m)^\s?(?<date>.+)\s?időpontban\s?(?<from_name>.+)\s*[\[|<|(](?<from_address>.+)[\]|>|)]\s?ezt írta\s?:",
    r#"(?m)^\s?Il giorno\s?(?<date>.+)\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?ha scritto\s?:"#,
    r"(?m)^\s?Op\s?(?<date>.+)\s?heeft\s?(?<from_name>.+)\s*[\[|<](?<from_address>.+)[\]|>]\s?geschreven\s?:",
    r"(?m)^\s?(?<from_name>.+)\s*[\[|<](?<from_address>.+)[\]|>]\s?skrev følgende den\s?(?<date>.+)\s?:",
    r"(?m)^\s?Dnia\s?(?<date>.+)\s?„(?<from_name>.+)”\s*[\[|<](?<from_address>.+)[\]|>]\s?napisał\s?:",
    r#"(?m)^\s?Em\s?(?<date>.+),\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?escreveu\s?:"#,
    r#"(?m)^\s?(?<date>.+)\s?пользователь\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?написал\s?:"#,
    r"(?m)^\s?(?<date>.+)\s?používateľ\s?(?<from_name>.+)\s*\([\[|<](?<from_address>.+)[\]|>]\)\s?napísal\s?:",
    r#"(?m)^\s?Den\s?(?<date>.+)\s?skrev\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>]\s?följande\s?:"#,
    r#"(?m)^\s?"(?<from_name>.+)"\s*[\[|<](?<from_address>.+)[\]|>],\s?(?<date>.+)\s?tarihinde şunu yazdı\s?:"#,
];

/// Subject header labels, anchored to line start
pub const ORIGINAL_SUBJECT: &[&str] = &[
    r"(?mi)^\*?Subject\s?:\*?(.+)",
    r"(?mi)^Předmět\s?:(.+)",
    r"(?mi)^Emne\s?:(.+)",
    r"(?mi)^Betreff\s?:(.+)",
    r"(?mi)^Asunto\s?:(.+)",
    r"(?mi)^Aihe\s?:(.+)",
    r"(?mi)^Objet\s?:(.+)",
    r"(?mi)^Predmet\s?:(.+)",
    r"(?mi)^Tárgy\s?:(.+)",
    r"(?mi)^Oggetto\s?:(.+)",
    r"(?mi)^Onderwerp\s?:(.+)",
    r"(?mi)^Temat\s?:(.+)",
    r"(?mi)^Assunto\s?:(.+)",
    r"(?mi)^Subiectul\s?:(.+)",
    r"(?mi)^Тема\s?:(.+)",
    r"(?mi)^Ämne\s?:(.+)",
    r"(?mi)^Konu\s?:(.+)",
    r"(?mi)^Sujet\s?:(.+)",
    r"(?mi)^Naslov\s?:(.+)",
    r"(?mi)^件名：(.+)",
];

/// Subject labels anywhere in the text (fallback for clients that glue
/// headers onto one line)
pub const ORIGINAL_SUBJECT_LAX: &[&str] = &[
    r"(?i)Subject\s?:(.+)",
    r"(?i)Emne\s?:(.+)",
    r"(?i)Předmět\s?:(.+)",
    r"(?i)Betreff\s?:(.+)",
    r"(?i)Asunto\s?:(.+)",
    r"(?i)Aihe\s?:(.+)",
    r"(?i)Objet\s?:(.+)",
    r"(?i)Tárgy\s?:(.+)",
    r"(?i)Oggetto\s?:(.+)",
    r"(?i)Onderwerp\s?:(.+)",
    r"(?i)Assunto\s?:?(.+)",
    r"(?i)Temat\s?:(.+)",
    r"(?i)Subiect\s?:(.+)",
    r"(?i)Тема\s?:(.+)",
    r"(?i)Predmet\s?:(.+)",
    r"(?i)Ämne\s?:(.+)",
    r"(?i)Konu\s?:(.+)",
];

/// From header labels, anchored to line start. The outer group captures the
/// full labeled line so splits can rebuild nested messages.
pub const ORIGINAL_FROM: &[&str] = &[
    r"(?m)^(\*?\s*From\s?:\*?(.+))$",
    r"(?m)^(\s*Od\s?:(.+))$",
    r"(?m)^(\s*Fra\s?:(.+))$",
    r"(?m)^(\s*Von\s?:(.+))$",
    r"(?m)^(\s*De\s?:(.+))$",
    r"(?m)^(\s*Lähettäjä\s?:(.+))$",
    r"(?m)^(\s*Šalje\s?:(.+))$",
    r"(?m)^(\s*Feladó\s?:(.+))$",
    r"(?m)^(\s*Da\s?:(.+))$",
    r"(?m)^(\s*Van\s?:(.+))$",
    r"(?m)^(\s*Expeditorul\s?:(.+))$",
    r"(?m)^(\s*Отправитель\s?:(.+))$",
    r"(?m)^(\s*Från\s?:(.+))$",
    r"(?m)^(\s*Kimden\s?:(.+))$",
    r"(?m)^(\s*Від кого\s?:(.+))$",
    r"(?m)^(\s*Saatja\s?:(.+))$",
    r"(?m)^(\s*De la\s?:(.+))$",
    r"(?m)^(\s*Gönderen\s?:(.+))$",
    r"(?m)^(\s*От\s?:(.+))$",
    r"(?m)^(\s*Від\s?:(.+))$",
    r"(?m)^(\s*Mittente\s?:(.+))$",
    r"(?m)^(\s*Nadawca\s?:(.+))$",
    r"(?m)^(\s*de la\s?:(.+))$",
    r"(?m)^(\s*送信元：(.+))$",
];

/// From labels with a bracketed address, matched anywhere (Yahoo Mail)
pub const ORIGINAL_FROM_LAX: &[&str] = &[
    r"(\s*From\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Od\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Fra\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Von\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*De\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Lähettäjä\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Feladó\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Da\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Van\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*De la\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*От\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Från\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Kimden\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
    r"(\s*Від\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])",
];

/// To header labels, anchored to line start
pub const ORIGINAL_TO: &[&str] = &[
    r"(?m)^\*?\s*To\s?:\*?(.+)$",
    r"(?m)^\s*Komu\s?:(.+)$",
    r"(?m)^\s*Til\s?:(.+)$",
    r"(?m)^\s*An\s?:(.+)$",
    r"(?m)^\s*Para\s?:(.+)$",
    r"(?m)^\s*Vastaanottaja\s?:(.+)$",
    r"(?m)^\s*À\s?:(.+)$",
    r"(?m)^\s*Prima\s?:(.+)$",
    r"(?m)^\s*Címzett\s?:(.+)$",
    r"(?m)^\s*A\s?:(.+)$",
    r"(?m)^\s*Aan\s?:(.+)$",
    r"(?m)^\s*Do\s?:(.+)$",
    r"(?m)^\s*Destinatarul\s?:(.+)$",
    r"(?m)^\s*Кому\s?:(.+)$",
    r"(?m)^\s*Pre\s?:(.+)$",
    r"(?m)^\s*Till\s?:(.+)$",
    r"(?m)^\s*Kime\s?:(.+)$",
    r"(?m)^\s*Pour\s?:(.+)$",
    r"(?m)^\s*Adresat\s?:(.+)$",
    r"(?m)^\s*送信先：(.+)$",
];

/// To labels matched without line-start anchoring
pub const ORIGINAL_TO_LAX: &[&str] = &[
    r"(?m)\s*To\s?:(.+)$",
    r"(?m)\s*Komu\s?:(.+)$",
    r"(?m)\s*Til\s?:(.+)$",
    r"(?m)\s*An\s?:(.+)$",
    r"(?m)\s*Para\s?:(.+)$",
    r"(?m)\s*Vastaanottaja\s?:(.+)$",
    r"(?m)\s*À\s?:(.+)$",
    r"(?m)\s*Címzett\s?:(.+)$",
    r"(?m)\s*A\s?:(.+)$",
    r"(?m)\s*Aan\s?:(.+)$",
    r"(?m)\s*Do\s?:(.+)$",
    r"(?m)\s*Către\s?:(.+)$",
    r"(?m)\s*Кому\s?:(.+)$",
    r"(?m)\s*Till\s?:(.+)$",
    r"(?m)\s*Kime\s?:(.+)$",
];

/// Reply-To header labels; only used to bound the original body
pub const ORIGINAL_REPLY_TO: &[&str] = &[
    r"(?m)^\s*Reply-To\s?:(.+)$",
    r"(?m)^\s*Odgovori na\s?:(.+)$",
    r"(?m)^\s*Odpověď na\s?:(.+)$",
    r"(?m)^\s*Svar til\s?:(.+)$",
    r"(?m)^\s*Antwoord aan\s?:(.+)$",
    r"(?m)^\s*Vastaus\s?:(.+)$",
    r"(?m)^\s*Répondre à\s?:(.+)$",
    r"(?m)^\s*Antwort an\s?:(.+)$",
    r"(?m)^\s*Válaszcím\s?:(.+)$",
    r"(?m)^\s*Rispondi a\s?:(.+)$",
    r"(?m)^\s*Odpowiedź-do\s?:(.+)$",
    r"(?m)^\s*Responder A\s?:(.+)$",
    r"(?m)^\s*Responder a\s?:(.+)$",
    r"(?m)^\s*Răspuns către\s?:(.+)$",
    r"(?m)^\s*Ответ-Кому\s?:(.+)$",
    r"(?m)^\s*Odpovedať-Pre\s?:(.+)$",
    r"(?m)^\s*Svara till\s?:(.+)$",
    r"(?m)^\s*Yanıt Adresi\s?:(.+)$",
    r"(?m)^\s*Кому відповісти\s?:(.+)$",
];

/// Cc header labels, anchored to line start
pub const ORIGINAL_CC: &[&str] = &[
    r"(?m)^\*?\s*Cc\s?:\*?(.+)$",
    r"(?m)^\s*CC\s?:(.+)$",
    r"(?m)^\s*Kopie\s?:(.+)$",
    r"(?m)^\s*Kopio\s?:(.+)$",
    r"(?m)^\s*Másolat\s?:(.+)$",
    r"(?m)^\s*Kopi\s?:(.+)$",
    r"(?m)^\s*Dw\s?:(.+)$",
    r"(?m)^\s*Копия\s?:(.+)$",
    r"(?m)^\s*Kopia\s?:(.+)$",
    r"(?m)^\s*Bilgi\s?:(.+)$",
    r"(?m)^\s*Копія\s?:(.+)$",
    r"(?m)^\s*Másolatot kap\s?:(.+)$",
    r"(?m)^\s*Kópia\s?:(.+)$",
    r"(?m)^\s*DW\s?:(.+)$",
    r"(?m)^\s*Kopie \(CC\)\s?:(.+)$",
    r"(?m)^\s*Copie à\s?:(.+)$",
    r"(?m)^\s*CC：(.+)$",
];

/// Cc labels matched without line-start anchoring
pub const ORIGINAL_CC_LAX: &[&str] = &[
    r"(?m)\s*Cc\s?:(.+)$",
    r"(?m)\s*CC\s?:(.+)$",
    r"(?m)\s*Kopie\s?:(.+)$",
    r"(?m)\s*Kopio\s?:(.+)$",
    r"(?m)\s*Másolat\s?:(.+)$",
    r"(?m)\s*Kopi\s?:(.+)$",
    r"(?m)\s*Dw\s?(.+)$",
    r"(?m)\s*Копия\s?:(.+)$",
    r"(?m)\s*Kópia\s?:(.+)$",
    r"(?m)\s*Kopia\s?:(.+)$",
    r"(?m)\s*Копія\s?:(.+)$",
];

/// Date / Sent header labels, anchored to line start
pub const ORIGINAL_DATE: &[&str] = &[
    r"(?m)^\s*Date\s?:(.+)$",
    r"(?m)^\s*Datum\s?:(.+)$",
    r"(?m)^\s*Dato\s?:(.+)$",
    r"(?m)^\s*Envoyé\s?:(.+)$",
    r"(?m)^\s*Fecha\s?:(.+)$",
    r"(?m)^\s*Päivämäärä\s?:(.+)$",
    r"(?m)^\s*Dátum\s?:(.+)$",
    r"(?m)^\s*Data\s?:(.+)$",
    r"(?m)^\s*Dată\s?:(.+)$",
    r"(?m)^\s*Дата\s?:(.+)$",
    r"(?m)^\s*Tarih\s?:(.+)$",
    r"(?m)^\*?\s*Sent\s?:\*?(.+)$",
    r"(?m)^\s*Päiväys\s?:(.+)$",
    r"(?m)^\s*日付：(.+)$",
];

/// Date labels matched without line-start anchoring
pub const ORIGINAL_DATE_LAX: &[&str] = &[
    r"(?m)\s*Datum\s?:(.+)$",
    r"(?m)\s*Sendt\s?:(.+)$",
    r"(?m)\s*Gesendet\s?:(.+)$",
    r"(?m)\s*Sent\s?:(.+)$",
    r"(?m)\s*Enviado\s?:(.+)$",
    r"(?m)\s*Envoyé\s?:(.+)$",
    r"(?m)\s*Lähetetty\s?:(.+)$",
    r"(?m)\s*Elküldve\s?:(.+)$",
    r"(?m)\s*Inviato\s?:(.+)$",
    r"(?m)\s*Verzonden\s?:(.+)$",
    r"(?m)\s*Wysłano\s?:(.+)$",
    r"(?m)\s*Trimis\s?:(.+)$",
    r"(?m)\s*Отправлено\s?:(.+)$",
    r"(?m)\s*Odoslané\s?:(.+)$",
    r"(?m)\s*Skickat\s?:(.+)$",
    r"(?m)\s*Gönderilen\s?:(.+)$",
    r"(?m)\s*Відправлено\s?:(.+)$",
];

/// One mailbox at the head of a recipients line, in decreasing order of
/// specificity. Two capture groups mean `{name, address}`, one means a bare
/// address.
pub const MAILBOX: &[&str] = &[
    r"^\s?\n?\s*<.+?<mailto:(.+?)>>",
    r"^(.+?)\s?\n?\s*<.+?<mailto:(.+?)>>",
    r"^(.+?)\s?\n?\s*[\[|<]mailto:(.+?)[\]|>]",
    r"^'(.+?)'\s?\n?\s*[\[|<](.+?)[\]|>]",
    r#"^"'(.+?)'"\s?\n?\s*[\[|<](.+?)[\]|>]"#,
    r#"^"(.+?)"\s?\n?\s*[\[|<](.+?)[\]|>]"#,
    r"^([^,;]+?)\s?\n?\s*[\[|<](.+?)[\]|>]",
    r"^(.?)\s?\n?\s*[\[|<](.+?)[\]|>]",
    r"^([^\s@]+@[^\s@]+\.[^\s@,]+)",
    r"^([^;].+?)\s?\n?\s*[\[|<](.+?)[\]|>]",
];

/// Address-syntax validation for a whole candidate string
pub const MAILBOX_ADDRESS: &[&str] = &[r"^(([^\s@]+)@([^\s@]+)\.([^\s@]+))$"];

/// Characters recognized as mailbox separators in recipient lists
pub const MAILBOX_SEPARATORS: &[char] = &[',', ';'];

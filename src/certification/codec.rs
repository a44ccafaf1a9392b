//! HTML fragment codec for certification cards

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Certification;

/// Class marking a certification anchor
pub const CARD_CLASS: &str = "cert-card";

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("valid regex"));
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b([^>]*)>").expect("valid regex"));
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<span\b[^>]*>(.*?)</span\s*>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").expect("valid regex")
});
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid regex")
});

/// Extract the certification cards from an HTML fragment.
///
/// Every `<a>` whose class list contains `cert-card` becomes one entry: its
/// `href` is the url, the nested `<img src>` the image and the text of the
/// nested `<span>` the name. Ids are positions in document order.
pub fn decode(html: &str) -> Vec<Certification> {
    ANCHOR_RE
        .captures_iter(html)
        .filter(|caps| {
            attribute(&caps[1], "class")
                .is_some_and(|class| class.split_whitespace().any(|c| c == CARD_CLASS))
        })
        .enumerate()
        .map(|(index, caps)| {
            let inner = &caps[2];
            let image = IMG_RE
                .captures(inner)
                .and_then(|img| attribute(&img[1], "src"))
                .unwrap_or_default();
            let name = SPAN_RE
                .captures(inner)
                .map(|span| unescape(&TAG_RE.replace_all(&span[1], "")))
                .unwrap_or_default();

            Certification {
                id: index.to_string(),
                name,
                url: attribute(&caps[1], "href").unwrap_or_default(),
                image,
            }
        })
        .collect()
}

/// Render certification cards as a grid fragment.
///
/// An empty list renders as an empty string rather than an empty grid.
pub fn encode(certs: &[Certification]) -> String {
    if certs.is_empty() {
        return String::new();
    }

    let cards = certs
        .iter()
        .map(|cert| {
            let name = escape(&cert.name);
            format!(
                "\n  <a href=\"{url}\" target=\"_blank\" class=\"{CARD_CLASS}\" style=\"text-decoration: none; color: inherit; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; text-align: center;\">\
                 \n    <img src=\"{image}\" width=\"120\" height=\"120\" alt=\"{name}\" style=\"transition: transform 0.2s;\">\
                 \n    <span style=\"font-size: 1rem; font-weight: 600;\">{name}</span>\
                 \n  </a>",
                url = escape(&cert.url),
                image = escape(&cert.image),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div class=\"cert-container\" style=\"display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; justify-items: center;\">\n{cards}\n</div>"
    )
}

fn attribute(attrs: &str, name: &str) -> Option<String> {
    ATTR_RE
        .captures_iter(attrs)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or(caps.get(3)).or(caps.get(4)))
        .map(|value| unescape(value.as_str()))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode character references: decimal and hex numeric references and
/// the named entities in [`NAMED_ENTITIES`]. Unknown or invalid references
/// are kept as written.
fn unescape(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let reference = &caps[1];
            let decoded = match reference.strip_prefix('#') {
                Some(number) => numeric_reference(number),
                None => NAMED_ENTITIES
                    .iter()
                    .find(|(name, _)| *name == reference)
                    .map(|(_, c)| *c),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_reference(number: &str) -> Option<char> {
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse().ok()?,
    };
    match code {
        0 => Some(char::REPLACEMENT_CHARACTER),
        code => char::from_u32(code),
    }
}

/// Named entities likely to appear in hand-written card text
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("hellip", '\u{2026}'),
    ("middot", '\u{b7}'),
    ("bull", '\u{2022}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
    ("laquo", '\u{ab}'),
    ("raquo", '\u{bb}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
    ("trade", '\u{2122}'),
    ("deg", '\u{b0}'),
    ("times", '\u{d7}'),
    ("divide", '\u{f7}'),
    ("plusmn", '\u{b1}'),
    ("sect", '\u{a7}'),
    ("para", '\u{b6}'),
    ("euro", '\u{20ac}'),
    ("pound", '\u{a3}'),
    ("yen", '\u{a5}'),
    ("cent", '\u{a2}'),
    ("shy", '\u{ad}'),
    ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'),
    ("thinsp", '\u{2009}'),
    ("zwj", '\u{200d}'),
    ("zwnj", '\u{200c}'),
    ("agrave", '\u{e0}'),
    ("aacute", '\u{e1}'),
    ("acirc", '\u{e2}'),
    ("auml", '\u{e4}'),
    ("aring", '\u{e5}'),
    ("ccedil", '\u{e7}'),
    ("egrave", '\u{e8}'),
    ("eacute", '\u{e9}'),
    ("ecirc", '\u{ea}'),
    ("euml", '\u{eb}'),
    ("iacute", '\u{ed}'),
    ("iuml", '\u{ef}'),
    ("ntilde", '\u{f1}'),
    ("oacute", '\u{f3}'),
    ("ocirc", '\u{f4}'),
    ("ouml", '\u{f6}'),
    ("oslash", '\u{f8}'),
    ("uacute", '\u{fa}'),
    ("uuml", '\u{fc}'),
    ("szlig", '\u{df}'),
    ("Aacute", '\u{c1}'),
    ("Auml", '\u{c4}'),
    ("Eacute", '\u{c9}'),
    ("Ouml", '\u{d6}'),
    ("Uuml", '\u{dc}'),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    fn cards() -> Vec<Certification> {
        vec![
            Certification::new(
                "AWS Certified Cloud Practitioner",
                "https://www.credly.com/badges/abc",
                "/assets/images/certificates/aws_ccp.png",
            ),
            Certification::new(
                "Terraform Associate",
                "https://www.credly.com/badges/def",
                "/assets/images/certificates/terraform.png",
            ),
        ]
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_empty_is_empty() {
        assert!(decode("").is_empty());
        assert!(decode("<p>No cards here</p>").is_empty());
    }

    #[test]
    fn encode_wraps_cards_in_grid() {
        let html = encode(&cards());
        assert!(html.starts_with("<div class=\"cert-container\""));
        assert!(html.ends_with("\n</div>"));
        assert_eq!(html.matches("class=\"cert-card\"").count(), 2);
        assert!(html.contains(
            "<span style=\"font-size: 1rem; font-weight: 600;\">Terraform Associate</span>"
        ));
    }

    #[test]
    fn decode_encoded_cards_assigns_positional_ids() {
        let decoded = decode(&encode(&cards()));
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].id, "0");
        assert_eq!(decoded[1].id, "1");
        for (got, want) in decoded.iter().zip(cards().iter()) {
            assert!(got.same_card(want), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn special_characters_survive() {
        let certs = vec![Certification::new(
            "R&D <Lead> \"Quoted\" O'Neil",
            "https://example.com/?a=1&b=2",
            "/assets/images/certificates/r_d.png",
        )];
        let decoded = decode(&encode(&certs));
        assert_eq!(decoded.len(), 1);
        assert!(decoded[0].same_card(&certs[0]));
    }

    #[test]
    fn decode_hand_written_fragment() {
        let html = r#"<div class="cert-container">
  <a class="featured cert-card" href='https://a.example' target="_blank">
    <IMG SRC="/img/a.png" alt="A">
    <span><b>Alpha</b> Cert</span>
  </a>
  <a href="https://ignored.example" class="other">Not a card</a>
  <a href="https://b.example" class="cert-card"><span>Beta</span></a>
</div>"#;

        let certs = decode(html);
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name, "Alpha Cert");
        assert_eq!(certs[0].url, "https://a.example");
        assert_eq!(certs[0].image, "/img/a.png");
        assert_eq!(certs[1].id, "1");
        assert_eq!(certs[1].name, "Beta");
        assert_eq!(certs[1].image, "");
    }

    #[test]
    fn data_src_is_not_src() {
        let html = r#"<a class="cert-card" href="u"><img data-src="/lazy.png" src="/real.png"><span>n</span></a>"#;
        assert_eq!(decode(html)[0].image, "/real.png");
    }

    #[test]
    fn unescape_leaves_unknown_entities() {
        assert_eq!(unescape("a &amp;lt; b &bogus; & &#xZZ;"), "a &lt; b &bogus; & &#xZZ;");
    }

    #[test]
    fn unescape_numeric_and_named_references() {
        assert_eq!(unescape("&#8211;&#x2013;&ndash;&nbsp;&eacute;&#39;"), "\u{2013}\u{2013}\u{2013}\u{a0}\u{e9}'");
        assert_eq!(unescape("&#1114112;"), "&#1114112;");
    }

    #[test]
    fn hand_written_entities_are_not_double_escaped() {
        let html = r#"<a class="cert-card" href="https://c.example"><img src="/c.png"><span>AWS &ndash; SAA &#8211; Pro&nbsp;Level</span></a>"#;

        let certs = decode(html);
        assert_eq!(certs[0].name, "AWS \u{2013} SAA \u{2013} Pro\u{a0}Level");

        let reencoded = encode(&certs);
        assert!(!reencoded.contains("&amp;"), "{reencoded}");
        assert!(decode(&reencoded)[0].same_card(&certs[0]));
    }

    fn certification() -> impl Strategy<Value = Certification> {
        ("\\PC{0,24}", "\\PC{0,24}", "\\PC{0,24}")
            .prop_map(|(name, url, image)| Certification::new(name, url, image))
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]
        #[test]
        fn decode_inverts_encode(certs in prop::collection::vec(certification(), 0..5)) {
            let decoded = decode(&encode(&certs));
            prop_assert_eq!(decoded.len(), certs.len());
            for (index, (got, want)) in decoded.iter().zip(&certs).enumerate() {
                prop_assert_eq!(&got.id, &index.to_string());
                prop_assert!(got.same_card(want), "{:?} != {:?}", got, want);
            }
        }
    }
}

//! Email login.
//!
//! Nothing is authenticated: the button reports what was typed and moves on.

use std::cell::RefCell;
use std::rc::Rc;

use bloom_core::*;
use bloom_ui::annotated::find_range;
use bloom_ui::*;

use crate::strings;

#[derive(Clone)]
pub struct LogInCallbacks {
    pub on_log_in: Rc<dyn Fn(String, String)>,
    pub on_terms_of_use: Rc<dyn Fn()>,
    pub on_privacy_policy: Rc<dyn Fn()>,
}

impl Default for LogInCallbacks {
    fn default() -> Self {
        Self {
            on_log_in: Rc::new(|_: String, _: String| {}),
            on_terms_of_use: Rc::new(|| {}),
            on_privacy_policy: Rc::new(|| {}),
        }
    }
}

/// Text typed into the two fields.
#[derive(Clone, Default)]
pub struct Credentials {
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
}

fn field(value: &Rc<RefCell<String>>, label: &str, keyboard: KeyboardType) -> View {
    let edit = value.clone();
    OutlinedTextField(
        value.borrow().clone(),
        label,
        Modifier::new().fill_max_width(),
        move |s| *edit.borrow_mut() = s,
    )
    .keyboard(keyboard)
}

pub fn LogIn(credentials: &Credentials, callbacks: &LogInCallbacks) -> View {
    let on_log_in = {
        let credentials = credentials.clone();
        let report = callbacks.on_log_in.clone();
        move || {
            let email = credentials.email.borrow().clone();
            let password = credentials.password.borrow().clone();
            report(email, password)
        }
    };

    Surface(
        Modifier::new(),
        colors().background,
        Column(Modifier::new().fill_max_size().padding_horizontal(16.0)).child((
            Text(strings::LOG_IN_TITLE)
                .style(typography().h1)
                .color(colors().on_background)
                .modifier(
                    Modifier::new()
                        .align(Alignment::CenterHorizontally)
                        .padding_from_baseline(184.0, 16.0),
                ),
            field(
                &credentials.email,
                strings::LOG_IN_EMAIL,
                KeyboardType::Email,
            ),
            Spacer(Modifier::new().height(8.0)),
            field(
                &credentials.password,
                strings::LOG_IN_PASSWORD,
                KeyboardType::Password,
            ),
            ConsentText(
                Modifier::new()
                    .align(Alignment::CenterHorizontally)
                    .padding_from_baseline(24.0, 16.0),
                typography()
                    .body2
                    .with_color(colors().on_background)
                    .with_align(TextAlign::Center),
                callbacks,
            ),
            Button(
                Modifier::new().fill_max_width().height(48.0),
                on_log_in,
                Text(strings::LOG_IN_BUTTON)
                    .style(typography().button)
                    .color(colors().on_secondary),
            ),
        )),
    )
}

/// Consent sentence whose "Terms of Use" and "Privacy Policy" parts are
/// links, tagged with their own text.
pub fn ConsentText(modifier: Modifier, style: TextStyle, callbacks: &LogInCallbacks) -> View {
    let consent = strings::LOG_IN_CONSENT;
    let mut b = AnnotatedString::builder();
    b.append(consent);
    for link in [strings::LOG_IN_TERMS_OF_USE, strings::LOG_IN_PRIVACY_POLICY] {
        if let Some(range) = find_range(consent, link) {
            add_hyperlink(&mut b, link, "", range);
        }
    }
    let text = b.build();

    let on_click = {
        let text = text.clone();
        let terms = callbacks.on_terms_of_use.clone();
        let privacy = callbacks.on_privacy_policy.clone();
        move |offset: usize| {
            let Some(link) = text.annotations_at(offset).next() else {
                return;
            };
            match link.tag.as_str() {
                strings::LOG_IN_TERMS_OF_USE => terms(),
                strings::LOG_IN_PRIVACY_POLICY => privacy(),
                other => log::debug!("consent: unhandled link {other:?}"),
            }
        }
    };

    ClickableText(text, modifier, on_click).style(style)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn consent_links_cover_their_words() {
        let v = ConsentText(Modifier::new(), TextStyle::default(), &LogInCallbacks::default());
        let ViewKind::ClickableText { text, .. } = &v.kind else {
            panic!("expected clickable text");
        };
        let tags: Vec<_> = text.annotations().iter().map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, ["Terms of Use", "Privacy Policy"]);
        for a in text.annotations() {
            assert_eq!(&text.text()[a.range.clone()], a.tag);
        }
    }

    #[test]
    fn offsets_outside_links_do_nothing() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let callbacks = LogInCallbacks {
            on_terms_of_use: Rc::new(move || h.set(h.get() + 1)),
            ..LogInCallbacks::default()
        };
        let v = ConsentText(Modifier::new(), TextStyle::default(), &callbacks);
        let ViewKind::ClickableText {
            on_click: Some(f), ..
        } = &v.kind
        else {
            panic!("expected clickable text");
        };
        f(0);
        assert_eq!(hits.get(), 0);
        let start = strings::LOG_IN_CONSENT.find("Terms").unwrap();
        f(start + 2);
        assert_eq!(hits.get(), 1);
    }
}

mod alert;
mod button;
mod spinner;
mod themed_text;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::Spinner;
pub(crate) use themed_text::{TextVariant, ThemedText};

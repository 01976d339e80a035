use strum_macros::Display;

/// The checker family a scenario is built for, displayed by family name.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Sanitizer {
    None,
    Address,
    Undefined,
    Thread,
    Memory,
}

impl Sanitizer {
    /// Family of a registry key, by its `asan_`/`ubsan_`/`tsan_`/`msan_`
    /// prefix. Family names themselves are not prefixes.
    pub fn of_key(key: &str) -> Self {
        match key.split_once('_').map(|(prefix, _)| prefix) {
            Some("asan") => Self::Address,
            Some("ubsan") => Self::Undefined,
            Some("tsan") => Self::Thread,
            Some("msan") => Self::Memory,
            _ => Self::None,
        }
    }

    /// Extra `RUSTFLAGS` the target has to be built with.
    ///
    /// `Undefined` needs none: overflow and division checks come from the
    /// profile, the null check from debug assertions.
    #[must_use]
    pub fn rustc_flag(self) -> Option<&'static str> {
        match self {
            Self::None | Self::Undefined => None,
            Self::Address => Some("-Zsanitizer=address"),
            Self::Thread => Some("-Zsanitizer=thread"),
            Self::Memory => Some("-Zsanitizer=memory"),
        }
    }
}

/// Banner level; maps onto the `alert-*` classes in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "alert alert-info",
            NoticeLevel::Success => "alert alert-success",
            NoticeLevel::Warning => "alert alert-warning",
            NoticeLevel::Error => "alert alert-error",
        }
    }
}

/// Transient inline message shown above or below a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

#![forbid(unsafe_code)]

//! Login and sign-up form state.
//!
//! Nothing here validates or submits anything; the forms only hold what the
//! user typed and decide which affordances are visible.

/// Single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    label: &'static str,
    value: String,
    secure: bool,
}

impl TextField {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secure: false,
        }
    }

    /// Mask the value when displayed.
    #[must_use]
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Placeholder label when empty, bullets when secure, text otherwise.
    #[must_use]
    pub fn display(&self) -> String {
        if self.value.is_empty() {
            self.label.to_string()
        } else if self.secure {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// External sign-in providers offered on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Apple,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [Self; 3] = [Self::Google, Self::Apple, Self::Facebook];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple",
            Self::Facebook => "Facebook",
        }
    }

    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Google => "https://accounts.google.com",
            Self::Apple => "https://icloud.com",
            Self::Facebook => "https://facebook.com/login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextField::new("Username"),
            password: TextField::new("Password").secure(),
            focus: LoginField::Username,
        }
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: LoginField) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Social links and the Sign Up button only show on a blank form.
    #[must_use]
    pub fn sign_up_visible(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sign up
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Curriculum {
    #[default]
    Cbse,
    Icse,
}

impl Curriculum {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cbse => "CBSE",
            Self::Icse => "ICSE",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Cbse => Self::Icse,
            Self::Icse => Self::Cbse,
        }
    }
}

/// Focus slots on the sign-up form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpField {
    #[default]
    Email,
    Name,
    Phone,
    Password,
    ConfirmPassword,
    Curriculum,
}

impl SignUpField {
    pub const ORDER: [Self; 6] = [
        Self::Email,
        Self::Name,
        Self::Phone,
        Self::Password,
        Self::ConfirmPassword,
        Self::Curriculum,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: TextField,
    pub name: TextField,
    pub phone: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub curriculum: Curriculum,
    focus: SignUpField,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            email: TextField::new("Email"),
            name: TextField::new("Name"),
            phone: TextField::new("Phone Number"),
            password: TextField::new("Password").secure(),
            confirm_password: TextField::new("Re-enter Password").secure(),
            curriculum: Curriculum::default(),
            focus: SignUpField::default(),
        }
    }
}

impl SignUpForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn focus(&self) -> SignUpField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: SignUpField) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Text field under focus; `None` while the picker is focused.
    pub fn focused_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SignUpField::Email => Some(&mut self.email),
            SignUpField::Name => Some(&mut self.name),
            SignUpField::Phone => Some(&mut self.phone),
            SignUpField::Password => Some(&mut self.password),
            SignUpField::ConfirmPassword => Some(&mut self.confirm_password),
            SignUpField::Curriculum => None,
        }
    }

    pub fn cycle_curriculum(&mut self) {
        self.curriculum = self.curriculum.next();
    }

    /// Fields in display order.
    #[must_use]
    pub fn text_fields(&self) -> [(SignUpField, &TextField); 5] {
        [
            (SignUpField::Email, &self.email),
            (SignUpField::Name, &self.name),
            (SignUpField::Phone, &self.phone),
            (SignUpField::Password, &self.password),
            (SignUpField::ConfirmPassword, &self.confirm_password),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_hides_once_anything_is_typed() {
        let mut form = LoginForm::new();
        assert!(form.sign_up_visible());

        form.focused_mut().push('a');
        assert!(!form.sign_up_visible());

        form.focused_mut().backspace();
        assert!(form.sign_up_visible());

        form.focus_next();
        form.focused_mut().push('x');
        assert!(!form.sign_up_visible());
        assert!(form.username.is_empty());
    }

    #[test]
    fn secure_fields_mask() {
        let mut field = TextField::new("Password").secure();
        assert_eq!(field.display(), "Password");
        field.set("abc");
        assert_eq!(field.display(), "•••");
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut field = TextField::new("Name");
        field.push('\n');
        field.push('\t');
        assert!(field.is_empty());
    }

    #[test]
    fn signup_tab_order_wraps() {
        let mut form = SignUpForm::new();
        for expected in SignUpField::ORDER.iter().skip(1) {
            form.focus_next();
            assert_eq!(form.focus(), *expected);
        }
        assert!(form.focused_mut().is_none());
        form.focus_next();
        assert_eq!(form.focus(), SignUpField::Email);
    }

    #[test]
    fn curriculum_defaults_to_cbse_and_cycles() {
        let mut form = SignUpForm::new();
        assert_eq!(form.curriculum, Curriculum::Cbse);
        form.cycle_curriculum();
        assert_eq!(form.curriculum.label(), "ICSE");
        form.cycle_curriculum();
        assert_eq!(form.curriculum, Curriculum::Cbse);
    }

    #[test]
    fn social_urls() {
        let urls: Vec<_> = SocialProvider::ALL.iter().map(|p| p.url()).collect();
        assert_eq!(
            urls,
            [
                "https://accounts.google.com",
                "https://icloud.com",
                "https://facebook.com/login"
            ]
        );
    }
}

// Auth form - 로그인/회원가입 폼 상태와 검증

use super::text_input::TextInput;
use thiserror::Error;

/// 폼 탭
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Register => "Register",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        }
    }

    /// 탭별 입력 필드 (화면 순서)
    pub fn fields(self) -> &'static [AuthField] {
        match self {
            AuthTab::Login => &[AuthField::Email, AuthField::Password],
            AuthTab::Register => &[
                AuthField::FirstName,
                AuthField::LastName,
                AuthField::CompanyName,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }
}

/// 입력 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    FirstName,
    LastName,
    CompanyName,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::FirstName => "First Name",
            AuthField::LastName => "Last Name",
            AuthField::CompanyName => "Company Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }

    /// 회사명만 선택 입력
    pub fn is_required(self) -> bool {
        !matches!(self, AuthField::CompanyName)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// 제출된 폼 (비밀번호 제외)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub tab: AuthTab,
    pub email: String,
    pub display_name: Option<String>,
}

/// 로그인/회원가입 폼 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub first_name: TextInput,
    pub last_name: TextInput,
    pub company_name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    /// 현재 탭의 필드 인덱스
    pub focused: usize,
    pub show_password: bool,
    pub error: Option<AuthError>,
}

impl AuthForm {
    /// 탭 전환 (에러 메시지 제거, 포커스 초기화)
    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggled();
        self.focused = 0;
        self.error = None;
    }

    pub fn focused_field(&self) -> AuthField {
        let fields = self.tab.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.tab.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.tab.fields().len();
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn input(&self, field: AuthField) -> &TextInput {
        match field {
            AuthField::FirstName => &self.first_name,
            AuthField::LastName => &self.last_name,
            AuthField::CompanyName => &self.company_name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn input_mut(&mut self, field: AuthField) -> &mut TextInput {
        match field {
            AuthField::FirstName => &mut self.first_name,
            AuthField::LastName => &mut self.last_name,
            AuthField::CompanyName => &mut self.company_name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        let field = self.focused_field();
        self.input_mut(field)
    }

    /// 제출 검증
    ///
    /// 실패 시 에러를 폼에 기록하고, 성공 시 에러를 지웁니다.
    pub fn submit(&mut self) -> Result<Submission, AuthError> {
        let result = self.validate();
        self.error = result.as_ref().err().cloned();
        result
    }

    fn validate(&self) -> Result<Submission, AuthError> {
        for field in self.tab.fields() {
            if field.is_required() && self.input(*field).is_empty() {
                return Err(AuthError::MissingField(field.label()));
            }
        }

        let email = self.email.value().trim();
        if !is_plausible_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let display_name = match self.tab {
            AuthTab::Login => None,
            AuthTab::Register => {
                if self.password.value() != self.confirm_password.value() {
                    return Err(AuthError::PasswordMismatch);
                }
                Some(format!(
                    "{} {}",
                    self.first_name.value().trim(),
                    self.last_name.value().trim()
                ))
            }
        };

        Ok(Submission {
            tab: self.tab,
            email: email.to_string(),
            display_name,
        })
    }
}

/// "local@domain.tld" 형태인지 간단히 확인
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && domain.contains('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

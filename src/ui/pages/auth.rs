// Auth page - 로그인/회원가입 폼

use super::{input_spans, PageContext};
use crate::core::boundary::RenderFailure;
use crate::models::{AuthField, AuthForm, AuthTab};
use crate::ui::components::card;
use crate::ui::theme::StyleTokenSet;
use crate::utils::formatter::mask_secret;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const FORM_WIDTH: u16 = 56;
const FIELD_HEIGHT: u16 = 3;

pub fn render(
    form: &AuthForm,
    ctx: PageContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<(), RenderFailure> {
    let fields = form.tab.fields();
    if form.focused >= fields.len() {
        return Err(RenderFailure::InvalidState(format!(
            "focused field {} not on {} form",
            form.focused,
            form.tab.label()
        )));
    }

    let tokens = ctx.tokens;
    // 탭(2) + 필드들 + 에러(1) + 버튼(1) + 안내(1) + 테두리(2)
    let form_height = 2 + FIELD_HEIGHT * fields.len() as u16 + 5;
    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Length(form_height.min(column.height))])
        .flex(Flex::Center)
        .areas(column);

    let title = match form.tab {
        AuthTab::Login => "Welcome Back",
        AuthTab::Register => "Create Account",
    };
    let block = card(title, tokens, false);
    let inner = block.inner(panel);
    block.render(panel, buf);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let rows = Layout::vertical(constraints).split(inner);

    render_tabs(form.tab, tokens, rows[0], buf);

    for (i, field) in fields.iter().enumerate() {
        let focused = i == form.focused;
        render_field(form, *field, focused, focused && ctx.editing, tokens, rows[i + 1], buf);
    }

    let footer = &rows[fields.len() + 1..];
    if let Some(error) = &form.error {
        Paragraph::new(Line::from(Span::styled(error.to_string(), tokens.error())))
            .alignment(Alignment::Center)
            .render(footer[0], buf);
    }

    let submit = match form.tab {
        AuthTab::Login => " Sign In ",
        AuthTab::Register => " Sign Up ",
    };
    Paragraph::new(Line::from(Span::styled(submit, tokens.button_contained())))
        .alignment(Alignment::Center)
        .render(footer[1], buf);

    let hint = if ctx.editing {
        "Enter: submit · Tab: next field · Esc: done"
    } else {
        "i: edit · h/l: switch form · v: show password"
    };
    Paragraph::new(Line::from(Span::styled(hint, tokens.caption())))
        .alignment(Alignment::Center)
        .render(footer[2], buf);

    Ok(())
}

fn render_tabs(active: AuthTab, tokens: &StyleTokenSet, area: Rect, buf: &mut Buffer) {
    let spans: Vec<Span> = [AuthTab::Login, AuthTab::Register]
        .into_iter()
        .map(|tab| {
            let style = if tab == active {
                tokens.button_contained()
            } else {
                tokens.button_outlined()
            };
            Span::styled(format!("  {}  ", tab.label()), style)
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_field(
    form: &AuthForm,
    field: AuthField,
    focused: bool,
    editing: bool,
    tokens: &StyleTokenSet,
    area: Rect,
    buf: &mut Buffer,
) {
    let input = form.input(field);
    let value = if field.is_secret() && !form.show_password {
        mask_secret(input.value())
    } else {
        input.value().to_string()
    };

    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    Paragraph::new(Line::from(input_spans(
        value,
        input,
        editing,
        tokens.text(),
        tokens.border_focused(),
    )))
    .block(card(&label, tokens, focused))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, PageStates, TextInput};
    use crate::ui::layout::LayoutMode;
    use crate::ui::pages::tests::render_to_text;
    use crate::ui::theme::DisplayMode;

    #[test]
    fn test_login_form() {
        let text = render_to_text(Page::Auth, &PageStates::default(), 100, 30);
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Email *"));
        assert!(text.contains("Password *"));
        assert!(text.contains("Sign In"));
        assert!(!text.contains("First Name"));
    }

    #[test]
    fn test_register_form_fields() {
        let mut states = PageStates::default();
        states.auth.switch_tab();

        let text = render_to_text(Page::Auth, &states, 100, 40);
        assert!(text.contains("Create Account"));
        assert!(text.contains("First Name *"));
        assert!(text.contains("Company Name"));
        assert!(!text.contains("Company Name *"));
        assert!(text.contains("Confirm Password *"));
    }

    #[test]
    fn test_password_masked_until_revealed() {
        let mut states = PageStates::default();
        states.auth.password = TextInput::with_value("hunter2");

        let text = render_to_text(Page::Auth, &states, 100, 30);
        assert!(text.contains("•••••••"));
        assert!(!text.contains("hunter2"));

        states.auth.toggle_password_visibility();
        let text = render_to_text(Page::Auth, &states, 100, 30);
        assert!(text.contains("hunter2"));
    }

    #[test]
    fn test_error_message_shown() {
        let mut states = PageStates::default();
        let _ = states.auth.submit();

        let text = render_to_text(Page::Auth, &states, 100, 30);
        assert!(text.contains("Email is required"));
    }

    #[test]
    fn test_focus_out_of_range_is_invalid_state() {
        let form = AuthForm {
            focused: 4,
            ..Default::default()
        };
        let tokens = StyleTokenSet::for_mode(DisplayMode::Dark);
        let ctx = PageContext {
            tokens: &tokens,
            layout: LayoutMode::Wide,
            editing: false,
        };
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);

        assert!(matches!(
            render(&form, ctx, area, &mut buf),
            Err(RenderFailure::InvalidState(_))
        ));
    }
}

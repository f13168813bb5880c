use askama::Template;

use postboard::presentation::board::*;

fn rows(titles: &[&str]) -> Vec<PostRowView> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| PostRowView {
            id: index as i64 + 1,
            title: (*title).to_string(),
        })
        .collect()
}

fn panel(rows: Vec<PostRowView>) -> BoardPanelView {
    BoardPanelView {
        rows,
        create_form: None,
        edit_form: None,
        pagination: PaginationView {
            current_page: 1,
            page_count: 1,
            can_go_previous: false,
            can_go_next: false,
        },
        prompt: None,
    }
}

#[test]
fn panel_lists_rows_and_page_indicator() {
    let html = BoardPanelTemplate {
        content: panel(rows(&["First Post", "Second Post"])),
    }
    .render()
    .expect("render panel");

    assert!(html.contains("data-board-panel"));
    assert!(html.contains("<td>First Post</td>"));
    assert!(html.contains("<td>Second Post</td>"));
    assert!(html.contains("Página 1 de 1"));
    assert!(html.contains("<th>ID</th>"));
    assert!(html.contains("<th>Título</th>"));
    assert!(html.contains("Crear Post"));
}

#[test]
fn closed_prompt_renders_no_confirm_control() {
    let html = BoardPanelTemplate {
        content: panel(rows(&["Only"])),
    }
    .render()
    .expect("render panel");

    assert!(!html.contains("Confirmar"));
    assert!(!html.contains("/prompt/confirm"));
}

#[test]
fn open_prompt_shows_title_message_and_actions() {
    let mut content = panel(rows(&["Only"]));
    content.prompt = Some(PromptView {
        title: "Eliminar Post".into(),
        message: "¿Estás seguro de que deseas eliminar este post?".into(),
        confirm_action: Some("/prompt/confirm"),
    });

    let html = BoardPanelTemplate { content }.render().expect("render panel");

    assert!(html.contains("Eliminar Post"));
    assert!(html.contains("¿Estás seguro de que deseas eliminar este post?"));
    assert!(html.contains("@post('/prompt/confirm')\">Confirmar"));
    assert!(html.contains("Cerrar"));
}

#[test]
fn prompt_without_action_offers_only_close() {
    let mut content = panel(rows(&["Only"]));
    content.prompt = Some(PromptView {
        title: "Aviso".into(),
        message: "Nada que confirmar".into(),
        confirm_action: None,
    });

    let html = BoardPanelTemplate { content }.render().expect("render panel");

    assert!(html.contains("<h2>Aviso</h2>"));
    assert!(html.contains("<p>Nada que confirmar</p>"));
    assert!(html.contains(">Cerrar</button>"));
    assert!(!html.contains("Confirmar"));
    assert!(!html.contains("/prompt/confirm"));
}

#[test]
fn boundary_buttons_are_disabled() {
    let mut content = panel(rows(&["Only"]));
    content.pagination = PaginationView {
        current_page: 2,
        page_count: 2,
        can_go_previous: true,
        can_go_next: false,
    };

    let html = BoardPanelTemplate { content }.render().expect("render panel");

    assert!(html.contains("@post('/pagination/previous')\">Anterior"));
    assert!(html.contains("@post('/pagination/next')\" disabled>Siguiente"));
}

#[test]
fn edit_form_is_prefilled_and_posts_to_update() {
    let mut content = panel(rows(&["Original"]));
    content.edit_form = Some(PostFormView {
        mode: PostFormMode::Edit(1),
        title: "Original".into(),
        body: "Cuerpo original".into(),
    });

    let html = BoardPanelTemplate { content }.render().expect("render panel");

    assert!(html.contains("Editar Post"));
    assert!(html.contains("value=\"Original\""));
    assert!(html.contains(">Cuerpo original</textarea>"));
    assert!(html.contains("/posts/1/update"));
    assert!(html.contains("/posts/edit/cancel"));
    assert!(!html.contains("Crear Nuevo Post"));
}

#[test]
fn create_and_edit_forms_can_render_together() {
    let mut content = panel(rows(&["Original"]));
    content.create_form = Some(PostFormView {
        mode: PostFormMode::Create,
        title: String::new(),
        body: String::new(),
    });
    content.edit_form = Some(PostFormView {
        mode: PostFormMode::Edit(1),
        title: "Original".into(),
        body: String::new(),
    });

    let html = BoardPanelTemplate { content }.render().expect("render panel");

    assert!(html.contains("Crear Nuevo Post"));
    assert!(html.contains("Editar Post"));
    assert!(html.contains("/posts/create"));
    assert_eq!(html.matches(">Guardar</button>").count(), 2);
    assert_eq!(html.matches(">Cancelar</button>").count(), 2);
}

#[test]
fn titles_are_html_escaped() {
    let html = BoardPanelTemplate {
        content: panel(rows(&["<script>alert(1)</script>"])),
    }
    .render()
    .expect("render panel");

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn page_wraps_panel_in_shell_heading() {
    let html = BoardPageTemplate {
        chrome: ShellChrome::new("Blog App"),
        content: panel(Vec::new()),
    }
    .render()
    .expect("render page");

    assert!(html.contains("<title>Blog App</title>"));
    assert!(html.contains("<h1>Blog App</h1>"));
    assert!(!html.contains("name=\"generator\""));
    assert!(html.contains("data-board-panel"));
    assert!(html.contains("datastar"));
}

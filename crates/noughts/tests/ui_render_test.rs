//! Headless rendering tests using ratatui's test backend.

use crossterm::event::KeyCode;
use crossterm::event::{Event, KeyEvent, KeyModifiers};
use noughts::{App, AppConfig, BoardLayout, RESTART_LABEL, draw};
use ratatui::{Terminal, backend::TestBackend, layout::Rect, style::Color};

fn render(app: &App) -> (Vec<String>, BoardLayout) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut layout = None;
    terminal.draw(|frame| layout = Some(draw(frame, app))).unwrap();

    let buffer = terminal.backend().buffer();
    let lines = (0..24u16)
        .map(|y| (0..80u16).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect();
    (lines, layout.unwrap())
}

fn press(app: &mut App, c: char) {
    app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
}

#[test]
fn test_initial_screen() {
    let app = App::new(&AppConfig::default());
    let (lines, layout) = render(&app);

    assert_eq!(layout, BoardLayout::new(Rect::new(0, 0, 80, 24), 9, 3));
    assert!(lines[0].contains("Tic-Tac-Toe"));
    assert!(lines[16].contains("Player X's turn"));
    assert!(lines[17].contains(RESTART_LABEL));
    // Empty cells show their digit hints.
    assert!(lines[7].contains('1'));
    assert!(lines[13].contains('9'));
}

#[test]
fn test_marks_and_status_follow_the_game() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, '1');
    press(&mut app, '5');

    let (lines, _) = render(&app);
    // Row 0 glyphs sit on terminal row 7, row 1 on row 10.
    assert!(lines[7].contains('X'));
    assert!(lines[10].contains('O'));
    assert!(lines[16].contains("Player X's turn"));
}

#[test]
fn test_win_and_draw_messages() {
    let mut app = App::new(&AppConfig::default());
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, c);
    }
    let (lines, _) = render(&app);
    assert!(lines[16].contains("Player X wins!"));

    press(&mut app, 'r');
    // X O X / X O O / O X X
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, c);
    }
    let (lines, _) = render(&app);
    assert!(lines[16].contains("Draw! No more moves."));
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::new(&AppConfig::default());
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, c);
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut layout = None;
    terminal.draw(|frame| layout = Some(draw(frame, &app))).unwrap();
    let layout = layout.unwrap();
    let buffer = terminal.backend().buffer();

    for row in 0..3 {
        for col in 0..3 {
            let cell = layout.cell(row, col).unwrap();
            let bg = buffer[(cell.x + 1, cell.y + 1)].bg;
            if row == 0 {
                assert_eq!(bg, Color::Red, "cell ({row}, {col})");
            } else {
                assert_ne!(bg, Color::Red, "cell ({row}, {col})");
            }
        }
    }
}

#[test]
fn test_hidden_cell_numbers() {
    let config: AppConfig = toml::from_str("show_cell_numbers = false").unwrap();
    let app = App::new(&config);
    let (lines, _) = render(&app);
    assert!(!lines[7].chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = App::new(&AppConfig::default());
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    terminal
        .draw(|frame| {
            draw(frame, &app);
        })
        .unwrap();
}

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use general_prefs::{
    form::{render, FormEvent},
    page::{ApplyMode, PreferencesEditor},
    panel::{EDITOR_DEFAULT, EDITOR_PATH, SIZE_UNITS},
    units::SizeUnits,
};

const GENERAL: usize = 0;

/// Trimmed answer, or `None` once input is closed.
fn ask(input: &mut impl BufRead, question: &str) -> Result<Option<String>> {
    eprint!("{question}");
    std::io::stderr().flush().ok();
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        eprintln!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_page(dialog: &PreferencesEditor) -> Result<()> {
    let window = dialog
        .window(GENERAL)
        .context("General preferences page is not shown")?;
    eprintln!("\n{}\n", render(&window.layout()));
    Ok(())
}

/// Walk through the General page, feeding answers to the dialog as user input.
/// Returns whether the edits were kept.
pub(super) fn run(dialog: &mut PreferencesEditor, input: &mut impl BufRead) -> Result<bool> {
    print_page(dialog)?;

    eprintln!("Editor path: type a path or command, \"d\" for the detected default, empty to keep.");
    match ask(input, "Editor: ")?.unwrap_or_default().as_str() {
        "" => {}
        "d" | "D" => dialog.dispatch(GENERAL, FormEvent::ButtonPressed { id: EDITOR_DEFAULT }),
        value => dialog.dispatch(
            GENERAL,
            FormEvent::TextChanged {
                id: EDITOR_PATH,
                value: value.to_string(),
            },
        ),
    }

    eprintln!("\nFile size units:");
    for (i, label) in SizeUnits::LABELS.iter().enumerate() {
        eprintln!("  {}. {label}", i + 1);
    }
    let answer = ask(input, "Choice [keep]: ")?.unwrap_or_default();
    if !answer.is_empty() {
        match answer.parse::<usize>() {
            Ok(n) if (1..=SizeUnits::LABELS.len()).contains(&n) => dialog.dispatch(
                GENERAL,
                FormEvent::ChoiceSelected {
                    id: SIZE_UNITS,
                    index: n - 1,
                },
            ),
            _ => eprintln!("Invalid choice, keeping current units."),
        }
    }

    print_page(dialog)?;

    if dialog.apply_mode() == ApplyMode::Immediate {
        return Ok(dialog.confirm());
    }
    // Closed input declines; only an explicit empty line takes the default.
    let keep = ask(input, "Save changes? [Y/n]: ")?.is_some_and(|answer| {
        answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    });
    if keep {
        Ok(dialog.confirm())
    } else {
        dialog.dismiss();
        Ok(false)
    }
}

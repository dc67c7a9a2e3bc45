mod fields;

use std::fs::File;
use std::io::{self, BufRead, Write};

use formwork::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Errors that end the contacts session.
#[derive(Debug, thiserror::Error)]
enum ContactsError {
    #[error("Failed to build form: {0}")]
    Form(#[from] FormError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A line typed by the user.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Change { name: &'a str, value: &'a str },
    Submit,
    Show,
    Quit,
    Unknown(&'a str),
}

fn parse(line: &str) -> Command<'_> {
    match line.trim() {
        "submit" => Command::Submit,
        "show" | "" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => match other.split_once('=') {
            Some((name, value)) => Command::Change {
                name: name.trim(),
                value,
            },
            None => Command::Unknown(other),
        },
    }
}

/// Press the view's submit button; `false` if there is none or it ignores presses.
fn press_submit(view: &Node) -> bool {
    view.submit_button().is_some_and(|button| button.press())
}

fn run() -> Result<(), ContactsError> {
    let children = fields::contact_form()?;
    let form = Form::with_config(FormConfig::new("contacts"), |data| {
        match serde_json::to_string_pretty(&data) {
            Ok(json) => println!("Submitted:\n{}", json),
            Err(e) => log::error!("Failed to encode submission: {}", e),
        }
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut view = form.render(&children)?;
    println!("{}", view.to_text());
    println!("Type name=value to edit, 'submit', 'show' or 'quit'.");

    for line in stdin.lock().lines() {
        let line = line?;
        let command = parse(&line);
        let show = command == Command::Show;
        match command {
            Command::Change { name, value } => match view.find_input(name) {
                Some(input) => input.change(value),
                None => println!("No field named '{}'", name),
            },
            Command::Submit => {
                if !press_submit(&view) {
                    println!("Submit is not available");
                }
            }
            Command::Show => {}
            Command::Quit => break,
            Command::Unknown(other) => println!("Unknown command '{}'", other),
        }

        if show || form.needs_render() {
            view = form.render(&children)?;
            println!("{}", view.to_text());
        }
        stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let log_file = File::create("contacts.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

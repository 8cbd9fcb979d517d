use colored::Colorize;
use togo::api::{CmdMessage, MessageLevel};
use togo::codec::format_date;
use togo::config::{TogoConfig, CONFIG_KEYS};
use togo::model::{DisplayTask, Task};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_tasks(tasks: &[DisplayTask]) {
    for dt in tasks {
        println!("{}", format_task(dt.position, &dt.task));
    }
}

pub(super) fn print_footer(shown: usize, total: usize, source: &str) {
    println!("-----");
    println!("{}/{} todos shown ({})", shown, total, source);
}

pub(super) fn print_config(config: &TogoConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// One display line: position, checkbox, priority, dates, then the subject
/// with projects and contexts highlighted.
pub(super) fn format_task(position: usize, task: &Task) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!("{:<2}", position));

    if task.done {
        parts.push("[x]".green().bold().to_string());
    } else {
        parts.push("[ ]".to_string());
    }

    if let Some(priority) = task.priority {
        parts.push(format!("({})", priority).bright_red().bold().to_string());
    }
    if let Some(date) = task.completion_date {
        parts.push(format_date(date));
    }
    if let Some(date) = task.creation_date {
        parts.push(format_date(date));
    }
    if !task.subject.is_empty() {
        parts.push(highlight_subject(task));
    }

    parts.join(" ")
}

fn highlight_subject(task: &Task) -> String {
    let projects = task.projects();
    let contexts = task.contexts();

    task.subject
        .split(' ')
        .map(|word| {
            if projects.contains(&word) {
                word.cyan().to_string()
            } else if contexts.contains(&word) {
                word.magenta().to_string()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

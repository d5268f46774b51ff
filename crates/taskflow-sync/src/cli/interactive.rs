/*
[INPUT]:  Controller state and user input via CLI
[OUTPUT]: Controller operations dispatched from an interactive loop
[POS]:    CLI interactive flow - declarative rendering over controller state
[UPDATE]: When adding actions or changing the rendering
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use taskflow_client::{NewTask, Task, TaskPatch};

use crate::app::{Severity, TaskController};

pub async fn run_interactive(controller: &mut TaskController) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("TaskFlow").bold().cyan());
    println!("{}", style("Streamline your productivity").dim());

    loop {
        println!();
        render_state(controller);
        // the snackbar has been shown once; next render starts clean
        controller.dismiss_notification();

        let actions = vec![
            "Refresh",
            "Add task",
            "Edit task",
            "Toggle complete",
            "Delete task",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => controller.refresh().await,
            1 => add_task(controller, &theme).await?,
            2 => edit_task(controller, &theme).await?,
            3 => toggle_task(controller, &theme).await?,
            4 => delete_task(controller, &theme).await?,
            _ => return Ok(()),
        }
    }
}

fn render_state(controller: &TaskController) {
    if let Some(error) = controller.error() {
        println!("{}", style(error).red().bold());
    }
    if let Some(notification) = controller.notification() {
        let message = notification.message.as_str();
        let styled = match notification.severity {
            Severity::Success => style(message).green(),
            Severity::Info => style(message).cyan(),
        };
        println!("{}", styled);
    }

    if controller.is_loading() {
        println!("{}", style("Loading tasks...").dim());
        return;
    }
    if controller.tasks().is_empty() {
        println!("{}", style("No tasks yet. Add one to get started!").yellow());
        return;
    }
    for (index, task) in controller.tasks().iter().enumerate() {
        let marker = if task.completed { "[x]" } else { "[ ]" };
        let title = if task.completed {
            style(task.title.as_str()).dim()
        } else {
            style(task.title.as_str()).bold()
        };
        if task.description.is_empty() {
            println!("{:>3}. {} {}", index + 1, marker, title);
        } else {
            println!(
                "{:>3}. {} {}  {}",
                index + 1,
                marker,
                title,
                style(task.description.as_str()).dim()
            );
        }
    }
}

fn select_task(
    controller: &TaskController,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<Task>> {
    let tasks = controller.tasks();
    if tasks.is_empty() {
        println!("{}", style("No tasks found.").yellow());
        return Ok(None);
    }

    let items: Vec<String> = tasks
        .iter()
        .map(|task| {
            let status = if task.completed { "done" } else { "open" };
            format!("{} | {}", task.title, status)
        })
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(tasks.get(selection).cloned())
}

async fn add_task(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let title: String = Input::with_theme(theme).with_prompt("Title").interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .default(String::new())
        .interact_text()?;

    controller.add_task(NewTask::new(title, description)).await;
    Ok(())
}

async fn edit_task(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(controller, theme, "Select task to edit")? else {
        return Ok(());
    };
    controller.select_for_edit(Some(task.clone()));

    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .default(task.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .default(task.description.clone())
        .interact_text()?;

    controller.update_task(TaskPatch::fields(title, description)).await;
    Ok(())
}

async fn toggle_task(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(controller, theme, "Select task to toggle")? else {
        return Ok(());
    };
    controller.toggle_complete(&task.id).await;
    Ok(())
}

async fn delete_task(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(controller, theme, "Select task to delete")? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete '{}'?", task.title))
        .default(false)
        .interact()?;
    if confirmed {
        controller.delete_task(&task.id).await;
    }
    Ok(())
}

use chrono::{Local, NaiveDate};
use domain_tasklist::{CommandResponse, TaskManager, TaskRepository};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::Command;

pub const STARTUP_TEXT: &str = "Welcome to TaskList! Type 'help' for available commands.";
pub const PROMPT: &str = "> ";
pub const HELP_TEXT: &str = "Commands:
  show
  today
  view-by-deadline
  add project <project name>
  add task <project name> <task description>
  check <task ID>
  uncheck <task ID>
  deadline <task ID> <deadline>
  help
  quit
";

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Read-eval-print loop over any line source and sink
pub struct Controller<R: TaskRepository, I, O> {
    manager: TaskManager<R>,
    input: I,
    output: O,
    today: Clock,
}

impl<R, I, O> Controller<R, I, O>
where
    R: TaskRepository,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(manager: TaskManager<R>, input: I, output: O) -> Self {
        Self {
            manager,
            input,
            output,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the source of "today" used by the `today` command
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        self.write_line(STARTUP_TEXT).await?;

        let mut line = String::new();
        loop {
            self.write(PROMPT).await?;

            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                tracing::debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(error) => {
                    let response = CommandResponse::from_error(&error);
                    self.write_line(response.message()).await?;
                }
            }
        }

        self.output.flush().await
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }

    async fn execute(&mut self, command: Command) -> io::Result<()> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Show => {
                let response = self.manager.display_all().await;
                self.listing(response).await
            }
            Command::Today => {
                let today = (self.today)();
                let response = self.manager.display_due(today).await;
                self.listing(response).await
            }
            Command::ViewByDeadline => {
                let response = self.manager.display_by_deadline().await;
                self.listing(response).await
            }
            Command::AddProject(name) => {
                let response = self.manager.add_project(&name).await;
                self.report(response).await
            }
            Command::AddTask {
                project,
                description,
            } => {
                let response = self.manager.add_task(&project, &description).await;
                self.report(response).await
            }
            Command::Check(id) => {
                let response = self.manager.check_task(id, true).await;
                self.report(response).await
            }
            Command::Uncheck(id) => {
                let response = self.manager.check_task(id, false).await;
                self.report(response).await
            }
            Command::Deadline { task_id, deadline } => {
                let response = self.manager.set_deadline(task_id, deadline).await;
                self.report(response).await
            }
            Command::Help => self.write(HELP_TEXT).await,
            Command::Unknown(command) => {
                self.write_line(&format!("I don't know what the command \"{command}\" is."))
                    .await
            }
            Command::Quit => Ok(()),
        }
    }

    /// Listings are printed as rendered; failures get their own line.
    async fn listing(&mut self, response: CommandResponse) -> io::Result<()> {
        match response {
            CommandResponse::Success(text) => self.write(&text).await,
            CommandResponse::Failure(message) => self.write_line(&message).await,
        }
    }

    /// Mutations stay silent on success.
    async fn report(&mut self, response: CommandResponse) -> io::Result<()> {
        match response {
            CommandResponse::Success(_) => Ok(()),
            CommandResponse::Failure(message) => self.write_line(&message).await,
        }
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

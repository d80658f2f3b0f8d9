use crate::session::{Reply, Session};
use crate::wiki::ArticleSource;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::time::Duration;

const USER_PROMPT: &str = "\x1b[1;32mUser\x1b[0m    >> ";

pub fn bot(msg: &str) {
    println!("\x1b[1;34mChatBot\x1b[0m >> {msg}");
}

fn warn(msg: &str) {
    println!("\x1b[1;34mChatBot\x1b[0m >> \x1b[33m{msg}\x1b[0m");
}

pub fn say(reply: &Reply) {
    match reply {
        Reply::Ignored => {}
        Reply::TopicFailed(_) | Reply::NotSure | Reply::QueryFirst => warn(&reply.to_string()),
        _ => bot(&reply.to_string()),
    }
}

async fn greeting(pause: Duration) {
    println!("Initializing ChatBot ...");
    tokio::time::sleep(pause).await;
    println!("Type \"bye\" or \"quit\" or \"exit\" to end chat");
    tokio::time::sleep(pause).await;
    println!(
        "\n\
Enter your topic of interest when prompted.
ChatBot will access Wikipedia, prepare itself to
respond to your queries on that topic.
"
    );
    tokio::time::sleep(pause).await;
    println!(
        "\
ChatBot will respond with short info.
If you input \"more\", it will give you detailed info.
You can also jump to next query."
    );
    tokio::time::sleep(pause).await;
    println!("{}", "-".repeat(50));
    bot("Hello, Great day! Please give me a topic of your interest.");
}

fn farewell() {
    say(&Reply::Farewell);
    println!("\nQuitting ChatBot ...");
}

#[derive(Debug)]
pub struct Repl<S> {
    session: Session<S>,
    greeting_pause: Duration,
}

impl<S: ArticleSource> Repl<S> {
    pub const fn new(session: Session<S>, greeting_pause: Duration) -> Self {
        Self {
            session,
            greeting_pause,
        }
    }

    /// Greets, optionally loads `topic` up front, then answers lines until the
    /// user leaves.
    pub async fn run(&mut self, topic: Option<&str>) -> anyhow::Result<()> {
        greeting(self.greeting_pause).await;

        if let Some(topic) = topic {
            println!("{USER_PROMPT}{topic}");
            let reply = self.session.select_topic(topic).await;
            say(&reply);
        }

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(USER_PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());

                    let reply = self.session.handle(&line).await;
                    if reply.is_terminal() {
                        farewell();
                        break;
                    }
                    say(&reply);
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    farewell();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}

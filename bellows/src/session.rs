use crate::rank::{RankError, rank};
use crate::text::SentenceIndex;
use crate::wiki::{Article, ArticleSource, resolve};
use std::fmt;

pub const EXIT_KEYWORDS: &[&str] = &["bye", "quit", "exit"];
pub const MORE_KEYWORD: &str = "more";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Exit,
    More,
    Text(&'a str),
}

/// Classifies one line of user input. Keywords match after trimming and
/// lowercasing; anything else is passed through untouched.
pub fn parse_input(input: &str) -> Command<'_> {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        Command::Empty
    } else if EXIT_KEYWORDS.contains(&key.as_str()) {
        Command::Exit
    } else if key == MORE_KEYWORD {
        Command::More
    } else {
        Command::Text(input)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingTopic,
    Ready,
    Terminated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub last_answered: Option<usize>,
    pub topic_selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    TopicReady { title: String },
    TopicFailed(String),
    Answer(String),
    NotSure,
    Detail(String),
    QueryFirst,
    Farewell,
    Ignored,
}

impl Reply {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Farewell)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopicReady { title } => {
                write!(f, "Topic is \"Wikipedia: {title}\". Let's chat!")
            }
            Self::TopicFailed(reason) => {
                write!(f, "Error: {reason}. Please input some other topic!")
            }
            Self::Answer(text) | Self::Detail(text) => f.write_str(text),
            Self::NotSure => f.write_str("I am not sure. Sorry!"),
            Self::QueryFirst => f.write_str("Please input your query first!"),
            Self::Farewell => f.write_str("See you soon! Bye!"),
            Self::Ignored => Ok(()),
        }
    }
}

/// One conversation about one article. Owns everything the bot knows: the
/// article, its sentence index and the turn state.
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    base_url: String,
    article: Option<Article>,
    index: SentenceIndex,
    state: ConversationState,
    terminated: bool,
}

impl<S: ArticleSource> Session<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            article: None,
            index: SentenceIndex::default(),
            state: ConversationState::default(),
            terminated: false,
        }
    }

    pub const fn phase(&self) -> Phase {
        if self.terminated {
            Phase::Terminated
        } else if self.state.topic_selected {
            Phase::Ready
        } else {
            Phase::AwaitingTopic
        }
    }

    pub const fn state(&self) -> ConversationState {
        self.state
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub const fn index(&self) -> &SentenceIndex {
        &self.index
    }

    pub async fn handle(&mut self, input: &str) -> Reply {
        if self.terminated {
            return Reply::Ignored;
        }

        match parse_input(input) {
            Command::Empty => Reply::Ignored,
            Command::Exit => {
                self.terminated = true;
                Reply::Farewell
            }
            Command::More => self.more(),
            Command::Text(text) if self.state.topic_selected => self.query(text),
            Command::Text(topic) => self.select_topic(topic).await,
        }
    }

    pub async fn select_topic(&mut self, topic: &str) -> Reply {
        match resolve(&self.source, &self.base_url, topic).await {
            Ok(article) => {
                self.index = SentenceIndex::build(&article.paragraphs);
                tracing::debug!("indexed {} sentence(s)", self.index.len());

                let title = article.title.clone();
                self.article = Some(article);
                self.state = ConversationState {
                    last_answered: None,
                    topic_selected: true,
                };
                Reply::TopicReady { title }
            }
            Err(e) => {
                tracing::debug!("topic `{}` failed: {e:?}", topic.trim());
                Reply::TopicFailed(e.to_string())
            }
        }
    }

    pub fn query(&mut self, text: &str) -> Reply {
        match rank(self.index.entries(), text) {
            Ok(found) => {
                self.state.last_answered = Some(found.index);
                self.index
                    .sentence(found.index)
                    .map_or(Reply::NotSure, |sentence| {
                        Reply::Answer(sentence.to_string())
                    })
            }
            Err(RankError::NoConfidentMatch | RankError::InsufficientData) => Reply::NotSure,
        }
    }

    pub fn more(&self) -> Reply {
        self.state
            .last_answered
            .and_then(|id| self.index.paragraph_id(id))
            .and_then(|paragraph| self.article.as_ref()?.paragraph(paragraph))
            .map_or(Reply::QueryFirst, |text| Reply::Detail(text.to_string()))
    }
}

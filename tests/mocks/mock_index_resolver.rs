use contact_book::domain::PhoneNumber;
use contact_book::selection::{IndexResolver, SelectionError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Index resolver that replays scripted answers.
///
/// Clones share the script and the log of prompts, so a test can hand one
/// clone to the dispatcher and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ScriptedResolver {
    answers: Arc<Mutex<VecDeque<Result<usize, SelectionError>>>>,
    prompts: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

#[allow(dead_code)]
impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next prompt.
    pub fn answer(self, answer: Result<usize, SelectionError>) -> Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }

    /// Every prompt shown so far: the contact name and its phones.
    pub fn prompts(&self) -> Vec<(String, Vec<String>)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl IndexResolver for ScriptedResolver {
    fn resolve(&mut self, name: &str, phones: &[PhoneNumber]) -> Result<usize, SelectionError> {
        self.prompts.lock().unwrap().push((
            name.to_string(),
            phones.iter().map(|p| p.as_str().to_string()).collect(),
        ));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SelectionError::NotANumber))
    }
}

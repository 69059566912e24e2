use crate::Arbitrary;
use crate::gameplay::Roll;
use crate::gameroom::Bot;

/// CPU player that rolls a fair die whenever it's asked.
#[derive(Debug, Clone)]
pub struct Fish(String);

impl Fish {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self(name.into())
    }
}

#[async_trait::async_trait]
impl Bot for Fish {
    fn name(&self) -> &str {
        &self.0
    }
    async fn roll(&mut self) -> Roll {
        Roll::random()
    }
}

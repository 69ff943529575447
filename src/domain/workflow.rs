//! Workflow records handed to the runner.

use std::fmt;

use serde::{Serialize, Serializer};

/// Producer of a test case list, called at most once.
pub type TestcaseGenerator = Box<dyn FnOnce() -> Vec<String> + Send>;

/// Function executed for every test case of a workflow.
pub type WorkflowCallback = Box<dyn Fn(&str) + Send>;

/// Test cases of a workflow: either known up front or produced on demand.
pub enum Testcases {
    Fixed(Vec<String>),
    Generator(TestcaseGenerator),
}

impl Testcases {
    /// Invoke a pending producer and cache its output.
    ///
    /// Returns the materialized list. A fixed list is returned as is.
    pub fn materialize(&mut self) -> &[String] {
        if matches!(self, Testcases::Generator(_)) {
            let pending = std::mem::replace(self, Testcases::Fixed(Vec::new()));
            if let Testcases::Generator(generate) = pending {
                *self = Testcases::Fixed(generate());
            }
        }
        self.as_slice()
    }

    /// Fixed list contents; empty while a producer is still pending.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Testcases::Fixed(list) => list,
            Testcases::Generator(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Testcases::Generator(_))
    }
}

impl Default for Testcases {
    fn default() -> Self {
        Testcases::Fixed(Vec::new())
    }
}

impl From<Vec<String>> for Testcases {
    fn from(list: Vec<String>) -> Self {
        Testcases::Fixed(list)
    }
}

impl fmt::Debug for Testcases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testcases::Fixed(list) => f.debug_tuple("Fixed").field(list).finish(),
            Testcases::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl Serialize for Testcases {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Testcases::Fixed(list) => list.serialize(serializer),
            Testcases::Generator(_) => serializer.serialize_none(),
        }
    }
}

/// One unit of test execution.
#[derive(Default, Serialize)]
pub struct Workflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub testcases: Testcases,
    #[serde(skip)]
    pub callback: Option<WorkflowCallback>,
}

impl Workflow {
    pub fn new<S: Into<String>>(suite: S) -> Self {
        Self { suite: Some(suite.into()), ..Self::default() }
    }

    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_testcases<I, S>(mut self, testcases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.testcases = Testcases::Fixed(testcases.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_generator<F>(mut self, generate: F) -> Self
    where
        F: FnOnce() -> Vec<String> + Send + 'static,
    {
        self.testcases = Testcases::Generator(Box::new(generate));
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workflow")
            .field("suite", &self.suite)
            .field("version", &self.version)
            .field("testcases", &self.testcases)
            .field("callback", &self.callback.as_ref().map(|_| ".."))
            .finish()
    }
}

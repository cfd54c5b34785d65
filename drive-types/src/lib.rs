pub mod handles {
    use serde::{Deserialize, Serialize};

    /// A user of the drive, identified by the email they registered with.
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
    #[serde(transparent)]
    pub struct User {
        pub email: String,
    }

    impl User {
        pub fn new(email: impl Into<String>) -> Self {
            Self {
                email: email.into(),
            }
        }
    }
}

pub mod requests {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Login {
        pub email: String,
        pub password: String,
    }
}

pub mod responses {
    use serde::{Deserialize, Serialize};

    #[derive(
        Copy,
        Clone,
        Debug,
        Default,
        PartialEq,
        Eq,
        Serialize,
        Deserialize,
        strum::Display,
        strum::EnumString,
    )]
    #[serde(rename_all = "lowercase")]
    #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
    pub enum TokenType {
        #[default]
        Bearer,
    }

    /// Body returned by `POST /login`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Login {
        pub access_token: String,
        #[serde(default)]
        pub token_type: TokenType,
    }

    impl Login {
        /// Value for the `Authorization` header.
        pub fn authorization(&self) -> String {
            format!("{} {}", capitalize(&self.token_type.to_string()), self.access_token)
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
    #[display("{detail}")]
    pub struct ResponseError {
        pub detail: String,
    }

    pub(crate) fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

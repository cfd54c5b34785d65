#![allow(unused_imports)]
pub use leptos::*;
pub use leptos_router::{Route, Router, Routes, A};
pub use serde::{Deserialize, Serialize};

pub use drive_types::{handles, requests, responses};

pub(crate) use crate::{
    components::*,
    session::{Field, Session},
    settings::Settings,
};

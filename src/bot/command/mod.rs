//! Bot commands, grouped by feature area.

use crate::{error::AppError, state::Data};

pub mod admin;
pub mod compile;
pub mod fun;
pub mod meta;
pub mod starboard;
pub mod tag;

/// Every command registered with the framework.
pub fn all() -> Vec<poise::Command<Data, AppError>> {
    vec![
        admin::prefix(),
        admin::shutdown(),
        tag::tag(),
        meta::ping(),
        meta::stats(),
        compile::run(),
        fun::kitties(),
        starboard::setstarboard(),
    ]
}

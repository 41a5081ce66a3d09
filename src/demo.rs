//! The stock sample application: a two-field greeting form, wired the way
//! an embedding application is expected to wire its own.

use crate::app::AppDef;
use crate::harness::{AppCtx, Handlers};
use anyhow::Context;

pub fn definition() -> AppDef {
    AppDef {
        title: "Hello App".to_string(),
        prompts: vec!["Name".to_string(), "Age".to_string()],
        options: vec![
            "item 1".to_string(),
            "item 2".to_string(),
            "item 3".to_string(),
        ],
        ..AppDef::default()
    }
}

pub fn handlers() -> Handlers {
    Handlers::new().on_run(|ctx: &mut AppCtx| {
        let name = ctx.form.field(0);
        let raw_age = ctx.form.field(1);
        let age: i32 = raw_age
            .parse()
            .with_context(|| format!("\"{raw_age}\" is not a valid age"))?;
        ctx.console
            .append_line(format!("Hello {name}. You are {age} years old"));
        Ok(())
    })
}

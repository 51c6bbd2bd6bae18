use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use moviehub_core::routing::{resolve, MemoryHistory, RoutePattern, Router, RouterContext};
use serde::Serialize;

use crate::app::{app_routes, describe_match, Page, MOVIE_DETAIL_PATTERN};
use crate::commands::{format_favorite, layout_for, open_favorites};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteResolution {
    pub path: String,
    pub view: Option<Page>,
    pub params: BTreeMap<String, String>,
}

/// Resolve `path` against the application's route table.
pub fn resolve_route(path: &str) -> Result<RouteResolution> {
    let routes = app_routes()?;
    let matched = resolve(path, &routes);
    Ok(RouteResolution {
        path: path.to_string(),
        view: matched.as_ref().map(|m| *m.view()),
        params: matched.map(|m| m.params).unwrap_or_default(),
    })
}

/// Print which view a path renders and its parameters.
pub fn resolve_route_command(path: &str, json: bool) -> Result<()> {
    let resolution = resolve_route(path)?;

    if json {
        let serialized = serde_json::to_string_pretty(&resolution)
            .context("Failed to serialize route resolution to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Path: {}", resolution.path);
    match resolution.view {
        Some(view) => println!("View: {}", view),
        None => println!("View: (none)"),
    }
    if resolution.params.is_empty() {
        println!("Params: (none)");
    } else {
        println!("Params:");
        for (name, value) in &resolution.params {
            println!("  {} = {}", name, value);
        }
    }

    Ok(())
}

const SHELL_HELP: &str = "commands: go <path> | open <id> | back | forward | where | favorites | help | quit";

/// Interactive navigation session.
///
/// Reads one command per line from `input`. A router subscription records each
/// path change, and the change is reported after the command that caused it.
pub fn run_shell<R: BufRead, W: Write>(
    root: &str,
    start: &str,
    input: R,
    mut output: W,
) -> Result<()> {
    let layout = layout_for(root)?;
    let (_config, favorites) = open_favorites(&layout)?;
    let detail_pattern = RoutePattern::parse(MOVIE_DETAIL_PATTERN)?;

    let mut ctx = RouterContext::provide(Router::new(app_routes()?, MemoryHistory::new(start)));
    let changes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let _subscription = ctx.router()?.subscribe(move |path| sink.borrow_mut().push(path.clone()));

    writeln!(output, "at {}", ctx.current_path()?)?;

    for line in input.lines() {
        let line = line.context("Failed to read shell input")?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();

        match (command, arg) {
            ("quit" | "exit", _) => break,
            ("help", _) => writeln!(output, "{}", SHELL_HELP)?,
            ("go", Some(path)) => {
                if let Err(err) = ctx.navigate(path) {
                    writeln!(output, "error: {}", err)?;
                }
            }
            ("open", Some(id)) => match detail_pattern.reverse(id) {
                Some(path) => ctx.navigate(&path)?,
                None => writeln!(output, "error: invalid movie id '{}'", id)?,
            },
            ("back", _) => {
                if !ctx.router_mut()?.back() {
                    writeln!(output, "no previous page")?;
                }
            }
            ("forward", _) => {
                if !ctx.router_mut()?.forward() {
                    writeln!(output, "no next page")?;
                }
            }
            ("where", _) => {
                let router = ctx.router()?;
                let current = router.current_match();
                writeln!(
                    output,
                    "at {} [{}]",
                    router.current_path(),
                    describe_match(current.as_ref())
                )?;
            }
            ("favorites", _) => {
                writeln!(output, "favorites ({}):", favorites.len())?;
                for item in favorites.items() {
                    writeln!(output, "  - {}", format_favorite(item))?;
                }
            }
            (other, _) => writeln!(output, "unknown command '{}'; {}", other, SHELL_HELP)?,
        }

        let pending: Vec<String> = changes.borrow_mut().drain(..).collect();
        let router = ctx.router()?;
        for path in pending {
            let matched = router.resolve(&path);
            writeln!(output, "-> {} [{}]", path, describe_match(matched.as_ref()))?;
        }
    }

    let router = ctx.teardown().ok_or_else(|| anyhow!("router missing at shell exit"))?;
    writeln!(output, "bye from {}", router.current_path())?;
    Ok(())
}

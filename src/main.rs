// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Railgram CLI entrypoint.
//!
//! By default this prints every section of the Python grammar with a railroad diagram per rule.
//! `--filter` narrows the rules per section, `--rule` shows a single rule, and `--check` runs
//! the grammar integrity checks instead of rendering.

use std::error::Error;
use std::io::{self, Write};

use railgram::compile::{compile_rule, Diagram};
use railgram::grammar::{python_registry, python_sections};
use railgram::model::{Registry, RuleName, SectionIndex};
use railgram::query::{
    filter, references_of, rule_search, suggest_rules, used_by, RuleSearchMode,
};
use railgram::render::{render_diagram_unicode, RenderOptions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const SUGGESTION_LIMIT: usize = 3;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--section <id>] [--filter <query> [--regex]] [--json | --peg | --list]\n  {program} --rule <name> [--json | --peg]\n  {program} --check\n\nRender options: --max-label-width <n>, --no-comments.\n\nWithout --rule, every section is printed in display order; --filter keeps rules whose name\ncontains the query (case-insensitive), or matches it as a regex with --regex.\n--check reports duplicate definitions, dangling references and unsectioned rules.\n\nSet RUST_LOG (default `warn`) to control diagnostics on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    rule: Option<String>,
    section: Option<String>,
    filter: Option<String>,
    regex: bool,
    list: bool,
    json: bool,
    peg: bool,
    check: bool,
    max_label_width: Option<usize>,
    no_comments: bool,
    help: bool,
}

impl CliOptions {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_label_width: self.max_label_width,
            show_comments: !self.no_comments,
            ..RenderOptions::default()
        }
    }
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn set_value(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rule" => set_value(&mut options.rule, args.next())?,
            "--section" => set_value(&mut options.section, args.next())?,
            "--filter" => set_value(&mut options.filter, args.next())?,
            "--regex" => set_flag(&mut options.regex)?,
            "--list" => set_flag(&mut options.list)?,
            "--json" => set_flag(&mut options.json)?,
            "--peg" => set_flag(&mut options.peg)?,
            "--check" => set_flag(&mut options.check)?,
            "--no-comments" => set_flag(&mut options.no_comments)?,
            "--max-label-width" => {
                if options.max_label_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let width: usize = raw.parse().map_err(|_| ())?;
                if width == 0 {
                    return Err(());
                }
                options.max_label_width = Some(width);
            }
            "-h" | "--help" => set_flag(&mut options.help)?,
            _ => return Err(()),
        }
    }

    let outputs = [options.json, options.peg, options.list]
        .iter()
        .filter(|flag| **flag)
        .count();
    if outputs > 1 {
        return Err(());
    }
    if options.regex && options.filter.is_none() {
        return Err(());
    }
    if options.rule.is_some()
        && (options.section.is_some() || options.filter.is_some() || options.list)
    {
        return Err(());
    }
    if options.check && (options.rule.is_some() || options.section.is_some() || outputs > 0) {
        return Err(());
    }

    Ok(options)
}

/// One section worth of rules selected for output.
#[derive(Debug, Serialize)]
struct SectionOutput<'a> {
    id: &'a str,
    title: &'a str,
    rules: Vec<Diagram>,
}

fn run(
    options: &CliOptions,
    registry: &Registry,
    sections: &SectionIndex,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn Error>> {
    if options.check {
        return run_check(registry, sections, out);
    }
    if let Some(name) = &options.rule {
        return run_rule(options, registry, name, out);
    }

    let selected = select_sections(options, sections)?;
    let query_active = options.filter.is_some();
    if let Some(id) = &options.section {
        if selected.is_empty() {
            return Err(format!("unknown section `{id}`").into());
        }
    }

    if options.list {
        for (id, title, rules) in &selected {
            if query_active && rules.is_empty() {
                continue;
            }
            writeln!(out, "{id}\t{title}")?;
            for rule in rules {
                writeln!(out, "  {rule}")?;
            }
        }
        return Ok(0);
    }

    if options.json {
        let payload: Vec<SectionOutput<'_>> = selected
            .iter()
            .filter(|(_, _, rules)| !(query_active && rules.is_empty()))
            .map(|(id, title, rules)| SectionOutput {
                id: *id,
                title: *title,
                rules: rules
                    .iter()
                    .map(|rule| compile_rule(registry, rule.as_str()))
                    .collect(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &payload)?;
        writeln!(out)?;
        return Ok(0);
    }

    let render_options = options.render_options();
    for (_, title, rules) in &selected {
        if query_active && rules.is_empty() {
            continue;
        }
        writeln!(out, "== {title} ==")?;
        writeln!(out)?;
        for rule in rules {
            write_rule(options, registry, rule.as_str(), render_options, out)?;
        }
    }
    Ok(0)
}

type Selected<'a> = (&'a str, &'a str, Vec<&'a RuleName>);

fn select_sections<'a>(
    options: &CliOptions,
    sections: &'a SectionIndex,
) -> Result<Vec<Selected<'a>>, Box<dyn Error>> {
    let mut selected = Vec::new();
    for section in sections.sections() {
        if let Some(id) = &options.section {
            if section.id() != id.as_str() {
                continue;
            }
        }
        let rules = match (&options.filter, options.regex) {
            (Some(query), true) => {
                rule_search(section.rules(), query, RuleSearchMode::Regex, true)?
            }
            (Some(query), false) => filter(section.rules(), query),
            (None, _) => section.rules().iter().collect(),
        };
        selected.push((section.id().as_str(), section.title(), rules));
    }
    Ok(selected)
}

fn run_rule(
    options: &CliOptions,
    registry: &Registry,
    name: &str,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn Error>> {
    if !registry.has(name) {
        let suggestions = suggest_rules(registry.names(), name, SUGGESTION_LIMIT);
        if !suggestions.is_empty() {
            let list: Vec<&str> = suggestions.iter().map(|rule| rule.as_str()).collect();
            eprintln!("railgram: unknown rule `{name}`; did you mean: {}?", list.join(", "));
        }
    }
    if options.json {
        serde_json::to_writer_pretty(&mut *out, &compile_rule(registry, name))?;
        writeln!(out)?;
        return Ok(0);
    }
    write_rule(options, registry, name, options.render_options(), out)?;
    if !options.peg {
        write_navigation(registry, name, out)?;
    }
    Ok(0)
}

fn write_navigation(registry: &Registry, name: &str, out: &mut dyn Write) -> io::Result<()> {
    if let Ok(references) = references_of(registry, name) {
        if !references.is_empty() {
            let list: Vec<&str> = references.iter().map(|rule| rule.as_str()).collect();
            writeln!(out, "references: {}", list.join(", "))?;
        }
    }
    let users = used_by(registry, name);
    if !users.is_empty() {
        let list: Vec<&str> = users.iter().map(|rule| rule.as_str()).collect();
        writeln!(out, "used by: {}", list.join(", "))?;
    }
    Ok(())
}

fn write_rule(
    options: &CliOptions,
    registry: &Registry,
    name: &str,
    render_options: RenderOptions,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    if options.peg {
        match registry.lookup(name) {
            Ok(tree) => writeln!(out, "{name}: {tree}")?,
            Err(err) => writeln!(out, "{name}: /* {err} */")?,
        }
        return Ok(());
    }
    let diagram = compile_rule(registry, name);
    writeln!(out, "{name}")?;
    writeln!(out, "{}", render_diagram_unicode(&diagram, render_options)?)?;
    writeln!(out)?;
    Ok(())
}

fn run_check(
    registry: &Registry,
    sections: &SectionIndex,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn Error>> {
    let mut problems = 0usize;

    for warning in registry.diagnostics() {
        writeln!(out, "duplicate: {}", warning.name())?;
        problems += 1;
    }
    for xref in registry.dangling_references() {
        tracing::warn!(from = %xref.from(), to = xref.to(), "dangling rule reference");
        writeln!(out, "dangling: {} -> {}", xref.from(), xref.to())?;
        problems += 1;
    }
    for (rule, err) in registry.validate_all() {
        writeln!(out, "invalid: {rule}: {err}")?;
        problems += 1;
    }
    let report = sections.check_against(registry);
    for (section, rule) in &report.unknown {
        writeln!(out, "unknown: {section}/{rule}")?;
        problems += 1;
    }
    for rule in &report.unsectioned {
        writeln!(out, "unsectioned: {rule}")?;
        problems += 1;
    }

    writeln!(
        out,
        "{} rules, {} sections, {problems} problem(s)",
        registry.len(),
        sections.len()
    )?;
    Ok(if problems == 0 { 0 } else { 1 })
}

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let result = (|| -> Result<i32, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "railgram".to_owned());

        let options = match parse_options(args) {
            Ok(options) if options.help => {
                print_usage(&program);
                return Ok(0);
            }
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                return Ok(2);
            }
        };

        let registry = python_registry()?;
        let sections = python_sections()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&options, &registry, &sections, &mut out)
    })();

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("railgram: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, run, CliOptions};
    use railgram::grammar::{python_registry, python_sections};
    use railgram::model::{Expr, Registry, RuleName, SectionIndex};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn run_to_string(options: &CliOptions) -> (i32, String) {
        let registry = python_registry().expect("registry");
        let sections = python_sections().expect("sections");
        let mut out = Vec::new();
        let code = run(options, &registry, &sections, &mut out).expect("run");
        (code, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_rule_and_render_flags() {
        let options = parse_options(args(&[
            "--rule",
            "if_stmt",
            "--max-label-width",
            "12",
            "--no-comments",
        ]))
        .expect("parse options");
        assert_eq!(options.rule.as_deref(), Some("if_stmt"));
        assert_eq!(options.max_label_width, Some(12));
        let render = options.render_options();
        assert!(!render.show_comments);
        assert_eq!(render.max_label_width, Some(12));
    }

    #[test]
    fn parses_filter_with_regex() {
        let options = parse_options(args(&["--filter", "^star_", "--regex", "--list"]))
            .expect("parse options");
        assert_eq!(options.filter.as_deref(), Some("^star_"));
        assert!(options.regex);
        assert!(options.list);
    }

    #[test]
    fn rejects_invalid_combinations() {
        parse_options(args(&["--regex"])).unwrap_err();
        parse_options(args(&["--json", "--peg"])).unwrap_err();
        parse_options(args(&["--rule", "file", "--section", "starting"])).unwrap_err();
        parse_options(args(&["--check", "--json"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_values_and_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["file"])).unwrap_err();
        parse_options(args(&["--rule"])).unwrap_err();
        parse_options(args(&["--max-label-width", "0"])).unwrap_err();
        parse_options(args(&["--max-label-width", "wide"])).unwrap_err();
        parse_options(args(&["--list", "--list"])).unwrap_err();
        parse_options(args(&["--filter", "a", "--filter", "b"])).unwrap_err();
    }

    #[test]
    fn renders_a_single_rule() {
        let options = parse_options(args(&["--rule", "pass_stmt"])).expect("parse options");
        let (code, text) = run_to_string(&options);
        assert_eq!(code, 0);
        assert!(text.starts_with("pass_stmt\n"));
        assert!(text.contains("┤ 'pass' ├"));
        assert!(text.ends_with("used by: simple_stmt\n"), "{text}");
    }

    #[test]
    fn unknown_rule_renders_placeholder() {
        let options = parse_options(args(&["--rule", "pass_stmnt"])).expect("parse options");
        let (code, text) = run_to_string(&options);
        assert_eq!(code, 0);
        assert!(text.contains("no definition for `pass_stmnt`"));
    }

    #[test]
    fn lists_filtered_sections_only() {
        let options =
            parse_options(args(&["--filter", "lambda_star", "--list"])).expect("parse options");
        let (_, text) = run_to_string(&options);
        assert_eq!(text, "lambda\tLambda Functions\n  lambda_star_etc\n");
    }

    #[test]
    fn peg_output_prints_rule_text() {
        let options = parse_options(args(&["--rule", "del_stmt", "--peg"])).expect("parse options");
        let (_, text) = run_to_string(&options);
        assert_eq!(text, "del_stmt: 'del' del_targets\n");
    }

    #[test]
    fn check_passes_for_the_python_grammar() {
        let options = parse_options(args(&["--check"])).expect("parse options");
        let (code, text) = run_to_string(&options);
        assert_eq!(code, 0, "{text}");
        assert!(text.ends_with("0 problem(s)\n"));
    }

    #[test]
    fn check_reports_problems() {
        let mut registry = Registry::new();
        let name = RuleName::new("start").expect("name");
        registry.register(name.clone(), || Expr::non_terminal("gone"));
        registry.register(name, || Expr::non_terminal("gone"));
        let sections = SectionIndex::new();

        let options = parse_options(args(&["--check"])).expect("parse options");
        let mut out = Vec::new();
        let code = run(&options, &registry, &sections, &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(code, 1);
        assert!(text.contains("duplicate: start"));
        assert!(text.contains("dangling: start -> gone"));
        assert!(text.contains("unsectioned: start"));
    }
}

//! Ad-hoc CLI for inspecting a single file's parse: prints the collected
//! diagnostics (if any) and the resulting AST, the way a contributor
//! debugging a grammar production would use it from the command line.

use bpaf::Parser as _;

use tsfe::{Allocator, ScriptKind, ScriptTarget, SourceType};

#[derive(Debug, Clone)]
struct Args {
    ts: bool,
    tsx: bool,
    js: bool,
    jsx: bool,
    json: bool,
    target: String,
    allow_return_outside_function: bool,
    file: String,
}

fn args() -> impl bpaf::Parser<Args> {
    let ts = bpaf::long("ts").help("Parse as TypeScript (.ts)").switch();
    let tsx = bpaf::long("tsx").help("Parse as TypeScript with JSX (.tsx)").switch();
    let js = bpaf::long("js").help("Parse as JavaScript (.js)").switch();
    let jsx = bpaf::long("jsx").help("Parse as JavaScript with JSX (.jsx)").switch();
    let json = bpaf::long("json").help("Parse as JSON").switch();
    let target = bpaf::long("target")
        .help("Identifier-table target: es5, es2015 .. es2022, esnext (default)")
        .argument::<String>("TARGET")
        .fallback("esnext".to_string());
    let allow_return_outside_function = bpaf::long("allow-return-outside-function")
        .help("Allow a top-level `return` outside a function body")
        .switch();
    let file = bpaf::positional::<String>("FILE").help("Source file to parse");
    bpaf::construct!(Args { ts, tsx, js, jsx, json, target, allow_return_outside_function, file })
}

fn parse_target(name: &str) -> ScriptTarget {
    match name.to_ascii_lowercase().as_str() {
        "es5" => ScriptTarget::Es5,
        "es2015" => ScriptTarget::Es2015,
        "es2016" => ScriptTarget::Es2016,
        "es2017" => ScriptTarget::Es2017,
        "es2018" => ScriptTarget::Es2018,
        "es2019" => ScriptTarget::Es2019,
        "es2020" => ScriptTarget::Es2020,
        "es2021" => ScriptTarget::Es2021,
        "es2022" => ScriptTarget::Es2022,
        _ => ScriptTarget::EsNext,
    }
}

fn script_kind(args: &Args) -> ScriptKind {
    if args.ts {
        ScriptKind::Ts
    } else if args.tsx {
        ScriptKind::Tsx
    } else if args.js {
        ScriptKind::Js
    } else if args.jsx {
        ScriptKind::Jsx
    } else if args.json {
        ScriptKind::Json
    } else {
        ScriptKind::from_path(&args.file)
    }
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() {
    env_logger::init();
    let args = args().to_options().descr("Parse a TypeScript/JavaScript/JSX file and print its AST").run();

    let source_text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {err}", args.file);
            std::process::exit(1);
        }
    };

    let kind = script_kind(&args);
    let target = parse_target(&args.target);
    let source_type = SourceType::from_script_kind(kind).with_target(target);
    log::debug!("parsing {} as {kind:?} (target {target:?})", args.file);

    if args.allow_return_outside_function {
        log::warn!("{}: parsed leniently (--allow-return-outside-function)", args.file);
    }

    let allocator = Allocator::default();
    let ret = tsfe::Parser::new(&allocator, &source_text, source_type)
        .allow_return_outside_function(args.allow_return_outside_function)
        .parse();

    log::debug!(
        "{}: {} statements, {} comments, {} diagnostics",
        args.file,
        ret.program.statements.len(),
        ret.comments.len(),
        ret.errors.len()
    );

    if !ret.errors.is_empty() {
        eprint!("{}", tsfe::diagnostics::render_errors(&args.file, &source_text, &ret.errors));
        std::process::exit(1);
    }

    println!("{:#?}", ret.program);
}

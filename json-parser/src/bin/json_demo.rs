//! JSON 解析示例
//!
//! 用 json-parser 解析几段 JSON，打印结果或带插入符的错误诊断。
//!
//! 用法：
//! - `json-demo`：解析内置示例
//! - `json-demo <file>...`：解析给定文件
//! - `json-demo --strict ...`：重复键视为错误
//!
//! 设置 `RUST_LOG=debug` 可以看到解析日志。

use json_parser::{DuplicateKeys, JsonGrammar, JsonOptions};
use std::process::ExitCode;

const SAMPLES: &[&str] = &[
    r#"{
    "name" : "Scott",
    "isMale" : true,
    "bday" : {"year":2001, "month":12, "day":25 },
    "favouriteColors" : ["blue", "green"],
    "emptyArray" : [],
    "emptyObject" : {}
}"#,
    r#"{"widget": {"debug": "on", "window": {"title": "Sample ☺ Widget", "width": 500}}}"#,
    "[ 1, 2, ]",
    r#"{ "a": 1, "a": 2 }"#,
    "-123.45e2",
];

fn report(grammar: &JsonGrammar, name: &str, text: &str) -> bool {
    println!("输入: {name}");
    let ok = match grammar.parse(text) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(err) => {
            println!("{err}");
            false
        }
    };
    println!("{}", "=".repeat(50));
    ok
}

fn main() -> ExitCode {
    env_logger::init();

    let mut options = JsonOptions::new();
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--strict" {
            options = options.with_duplicate_keys(DuplicateKeys::Reject);
        } else {
            paths.push(arg);
        }
    }
    let grammar = JsonGrammar::new(options);

    if paths.is_empty() {
        println!("=== JSON 解析示例 ===\n");
        for sample in SAMPLES {
            report(&grammar, &format!("{sample:?}"), sample);
        }
        return ExitCode::SUCCESS;
    }

    let mut all_ok = true;
    for path in &paths {
        match std::fs::read_to_string(path) {
            Ok(text) => all_ok &= report(&grammar, path, &text),
            Err(err) => {
                eprintln!("无法读取 {path}: {err}");
                all_ok = false;
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

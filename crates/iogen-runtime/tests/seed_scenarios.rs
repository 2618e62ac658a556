//! End-to-end scenarios straight from the catalogue reference tests: each
//! compiles a short program and executes it directly against a fixed input,
//! independent of the sampler/driver.

use iogen_compiler::{compile_program, execute};
use iogen_core::Value;
use iogen_dsl::{DslRegistry, Language};

fn seq(xs: &[i64]) -> Value {
    Value::Seq(xs.to_vec())
}

#[test]
fn head() {
    let registry = DslRegistry::build(Language::Simple, 10);
    let program = compile_program(
        &registry,
        "a <- [int]\nb <- head a",
        10,
        Some(10),
        0,
        Some(0),
    )
    .unwrap();
    assert_eq!(program.bounds, vec![(0, 10)]);
    assert_eq!(execute(&program, &[seq(&[3, 5, 4, 7, 5])]), Value::Int(3));
}

#[test]
fn tail() {
    let registry = DslRegistry::build(Language::Simple, 10);
    let program = compile_program(
        &registry,
        "a <- [int]\nb <- tail a",
        10,
        Some(10),
        0,
        Some(0),
    )
    .unwrap();
    assert_eq!(
        execute(&program, &[seq(&[3, 5, 4, 7, 5])]),
        seq(&[5, 4, 7, 5])
    );
}

#[test]
fn count_head_in_tail() {
    let registry = DslRegistry::build(Language::Simple, 10);
    let source = "a <- [int]\nb <- tail a\nc <- head a\nd <- count c b";
    let program = compile_program(&registry, source, 10, Some(10), 0, Some(0)).unwrap();
    let input = seq(&[7, 4, 7, 8, 21, 1, 7, 2, 7, 5]);
    assert_eq!(execute(&program, &[input]), Value::Int(3));
}

#[test]
fn sum() {
    let registry = DslRegistry::build(Language::Extended, 99);
    let program = compile_program(
        &registry,
        "a <- [int]\nb <- sum a",
        99,
        Some(10),
        0,
        Some(0),
    )
    .unwrap();
    assert_eq!(program.bounds, vec![(1, 9)]);
    assert_eq!(execute(&program, &[seq(&[3, 5, 4, 7, 5])]), Value::Int(24));
}

#[test]
fn add_last() {
    let registry = DslRegistry::build(Language::Extended, 10);
    let source = "a <- [int]\nb <- int\nc <- last a\nd <- + b c";
    let program = compile_program(&registry, source, 10, Some(10), 0, Some(0)).unwrap();
    assert_eq!(program.bounds, vec![(1, 5), (1, 5)]);
    let out = execute(&program, &[seq(&[3, 5, 4, 7, 5]), Value::Int(5)]);
    assert_eq!(out, Value::Int(10));
}

#[test]
fn linq_sort_take_sum() {
    let registry = DslRegistry::build(Language::Linq, 512);
    let source = "a <- int\nb <- [int]\nc <- SORT b\nd <- TAKE a c\ne <- SUM d";
    let program = compile_program(&registry, source, 512, Some(10), 0, Some(0)).unwrap();
    let out = execute(&program, &[Value::Int(2), seq(&[3, 5, 4, 7, 5])]);
    assert_eq!(out, Value::Int(7));
}

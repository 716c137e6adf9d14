mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_run() {
    let mut r = Runtime::default();
    r.enter("10 LET X = 1");
    r.enter("20 PRINT X");
    r.enter("30 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
    assert_eq!(r.program().pc(), Some(10));
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_counting_loop() {
    let mut r = Runtime::default();
    r.enter("10 LET X=0");
    r.enter("20 LET X=X+1");
    r.enter("25 PRINT X");
    r.enter("30 IF X<3 THEN 20");
    r.enter("40 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n2\n3\n");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_replace_and_delete_lines() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("10 PRINT 10");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "10\n2\n");
    r.enter("20");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "10\n");
}

#[test]
fn test_list_and_tree() {
    let mut r = Runtime::default();
    r.enter("20 GOTO 10");
    r.enter("10 REM start");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "*10 REM start\n 20 GOTO 10\n");
    r.enter("TREE");
    assert_eq!(exec(&mut r), "*10 REM\n    start\n 20 GOTO\n    10\n");
}

#[test]
fn test_runtime_error_keeps_program() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 GOTO 50");
    r.enter("RUN");
    assert_eq!(
        exec(&mut r),
        "1\nruntime error: no matching line number in 20; line 50\n"
    );
    assert_eq!(r.program().pc(), Some(10));
    r.enter("50 PRINT 5");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n5\n");
}

#[test]
fn test_parse_error_keeps_program() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("20 LET = 3");
    assert_eq!(
        exec(&mut r),
        "parse error: incomplete statement in 20; usage: LET <varname> = <expression>\n"
    );
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_infinite_loop_interrupted() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(exec_n(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(exec(&mut r), "runtime error: break in 10\n");
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1");
    r.enter("LET A = 1");
    r.enter("CLEAR");
    assert!(r.program().is_empty());
    r.enter("PRINT A");
    assert_eq!(
        exec(&mut r),
        "runtime error: not declared; `A`\n"
    );
}

#[test]
fn test_commands() {
    let mut r = Runtime::default();
    r.enter("LOAD demos/count.bas");
    assert_eq!(exec(&mut r), "LOAD demos/count.bas\n");
    r.enter("LOAD");
    assert_eq!(
        exec(&mut r),
        "parse error: illegal command; usage: LOAD <file>\n"
    );
    r.enter("GOTO 10");
    assert_eq!(exec(&mut r), "parse error: illegal command; `GOTO`\n");
    r.enter("");
    assert_eq!(exec(&mut r), "");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_help() {
    let mut r = Runtime::default();
    r.enter("HELP");
    assert!(exec(&mut r).contains("IF <expression> <operator> <expression> THEN <linenumber>"));
}

#[test]
fn test_expression_too_complex() {
    let mut r = Runtime::default();
    r.enter(&format!("10 PRINT {}", vec!["1"; 5000].join("+")));
    assert_eq!(
        exec(&mut r),
        "parse error: illegal expression in 10; expression too complex\n"
    );
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
}

/*!
# Commands

Commands are typed at the `]` prompt and are never stored in a program.
*/

#[allow(non_snake_case)]
pub mod RUN {
    /*!
    ## `RUN` Executes the stored program from the line marked `*`.
    The run stops at `END`, after the last line, or on an error.
    */
}

#[allow(non_snake_case)]
pub mod LIST {
    /*!
    ## `LIST` Shows the stored program, one line per statement.
    */
}

#[allow(non_snake_case)]
pub mod TREE {
    /*!
    ## `TREE` Shows the parsed form of every stored line.
    ```text
    ] 10 LET A = 1 + B
    ] TREE
    *10 LET =
        A
        +
            1
            B
    ```
    */
}

#[allow(non_snake_case)]
pub mod LOAD {
    /*!
    ## `LOAD <file>` Replaces the program with the lines of a file.
    Blank lines are skipped. If any line fails to parse the current program
    is kept and the failing file line is reported.
    */
}

#[allow(non_snake_case)]
pub mod CLEAR {
    /*!
    ## `CLEAR` Erases the program and all variables.
    */
}

#[allow(non_snake_case)]
pub mod HELP {
    /*!
    ## `HELP` Prints a summary of the statements and commands.
    */
}

#[allow(non_snake_case)]
pub mod QUIT {
    /*!
    ## `QUIT` Leaves the interpreter.
    */
}

/*!
# `LET <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is required.

## Example
```text
LET A = 2 ** 10
PRINT A
1024
```

*/

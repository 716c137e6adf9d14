/*!
# `PRINT <expression>`

## Purpose
Prints the value of an expression on its own line.

## Example
```text
PRINT 1 + 2 * 3
7
```

*/

/*!
# `IF <expression> <comparator> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparators are `<`, `>` and `=`. The first comparator on the line
splits the two expressions, so comparators can't appear inside either
expression, not even in parentheses. When the comparison fails execution
continues with the next line.

## Example
```text
10 LET X = 0
20 LET X = X + 1
30 IF X < 3 THEN 20
40 PRINT X
```

*/

/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist a `no matching line number` error will occur.

## Example
```text
10 GOTO 30
20 PRINT 0
30 PRINT 1
```

*/

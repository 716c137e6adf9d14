/*!
# `END`

## Purpose
Finishes the run and moves execution back to the first line.

## Remarks
Running past the last line has the same effect, so `END` is only needed
to stop before the end of the listing.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
```

*/

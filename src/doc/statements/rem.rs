/*!
# `REM [content]`

## Purpose
A remark. The rest of the line is kept in the listing and ignored when run.

## Remarks
The remark is stored as tokens, so spacing is normalized: `REM a+b` lists
as `REM a + b`.

*/

/*!
# Errors

Errors come in two kinds. A parse error means a line could not be
understood. It is reported when the line is typed or loaded and nothing
is stored. A runtime error stops a run. The stored program is left as it
was and the next `RUN` starts again from the first line.

Errors in a stored line name the line: `runtime error: divide by zero in 20`.

## Parse errors

| Message | Cause |
|---------|-------|
| `illegal expression` | Empty `()`, juxtaposed values like `(1)(2)`, or an unexpected token. |
| `unmatched parenthesis` | A `(` or `)` has no partner. |
| `incomplete expression` | An operator is missing an operand, as in `1+`. |
| `illegal number` | A number too large for 32 bits, or bad `INPUT` response. |
| `illegal statement` | The line does not start with a statement word. |
| `incomplete statement` | Wrong form for the statement. The usage is shown. |
| `illegal variable name` | `LET` or `INPUT` was given something that is not a name. |
| `illegal line number` | Line numbers are positive whole numbers. |
| `illegal command` | Not a command or a direct statement. |

## Runtime errors

| Message | Cause |
|---------|-------|
| `not declared` | A variable was read before it was given a value. |
| `divide by zero` | The right side of `/` is 0. |
| `overflow` | A result does not fit 32 bits. |
| `no matching line number` | `GOTO` or `IF ... THEN` names a missing line. |
| `unknown statement` | Only `LET`, `PRINT` and `INPUT` run without a line number. |
| `break` | CTRL-C stopped the run. |
*/

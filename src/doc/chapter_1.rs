/*!
# Expressions

All values are signed 32-bit integers. There are no strings and no
floating point.

Variable names begin with a letter, `_` or `&`, followed by letters, digits,
`_` or `&`. Names are case sensitive, so `count` and `COUNT` are different
variables. A variable must be given a value with `LET` or `INPUT` before it
is read.

## Operators

From loosest to tightest binding:

| Operators | Meaning |
|-----------|---------|
| `+` `-`   | Addition and subtraction |
| `*` `/`   | Multiplication and integer division |
| `**`      | Exponentiation |

`+ - * /` group left to right. `**` groups right to left, so `2**3**2` is
`2**9`. Parentheses group as usual.

A `+` or `-` at the start of an expression or right after `(` is a sign
when a number or a name follows it. `-X*2` is `0-(X*2)` and
`2**-1` is an error while `2**(-1)` is 0.

## Arithmetic

 * Division truncates toward zero. Dividing by zero is an error.
 * A negative exponent gives 0.
 * A result that does not fit 32 bits is an overflow error.

```text
PRINT (1 + 2) * 3
9
PRINT 7 / 2
3
```
*/

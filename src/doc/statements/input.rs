/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a whole number from the terminal.

## Remarks
The prompt is the variable name followed by `?`. A response that isn't a
number is rejected and the prompt repeats. CTRL-C abandons the run.

## Example
```text
10 INPUT N
20 PRINT N * N
RUN
N ? 12
144
```

*/

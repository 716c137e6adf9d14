/*!
# Introductory Tutorial

Start the `basic` executable from a terminal. A `]` prompt means the
interpreter is waiting for you. Type `QUIT` or CTRL-D to leave.

Statements typed without a line number run immediately. Only `LET`,
`PRINT` and `INPUT` may be used this way.

<pre><code>&nbsp;] LET A = 6
&nbsp;] PRINT A * 7
&nbsp;42
</code></pre>

A statement that begins with a line number is stored instead. Lines are
kept in line number order no matter what order you type them in, and
typing a line number that already exists replaces that line. A line
number by itself deletes the line.

<pre><code>&nbsp;] 20 PRINT X
&nbsp;] 10 LET X = 1
&nbsp;] 30 END
&nbsp;] LIST
&nbsp;*10 LET X = 1
&nbsp; 20 PRINT X
&nbsp; 30 END
&nbsp;] RUN
&nbsp;1
</code></pre>

The `*` in a listing marks the line that will execute next.

Programs can also be loaded from a file with `LOAD <file>` or by naming the
file on the command line. Add `--run` to run it right away.

```text
basic --run count.bas
```
*/

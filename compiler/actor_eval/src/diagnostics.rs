//! Call-stack tracking for recursion limits and backtraces.

use actor_ir::{Name, Span, StringInterner};
use actor_runtime::errors::recursion_limit_exceeded;
use actor_runtime::{BacktraceFrame, EvalBacktrace, EvalError};

/// One active function call.
#[derive(Clone, Copy, Debug)]
pub struct CallFrame {
    /// Callee name; [`Name::EMPTY`] for lambdas.
    pub name: Name,
    /// Where the call was made.
    pub call_span: Option<Span>,
}

/// Active calls of an interpretation, bounded by `max_depth`.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing with a recursion-limit error once `max_depth`
    /// frames are active. Nothing is pushed on failure.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on an empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the active frames, innermost first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|frame| BacktraceFrame {
                name: if frame.name.is_empty() {
                    "<lambda>".to_string()
                } else {
                    interner.lookup(frame.name).to_string()
                },
                span: frame.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach the current backtrace to `err` unless the stack is empty.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

#[cfg(test)]
mod tests {
    use super::{CallFrame, CallStack};
    use actor_ir::{Name, Span, StringInterner};
    use actor_runtime::{EvalError, EvalErrorKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn push_fails_at_the_limit() {
        let mut stack = CallStack::new(2);
        let frame = CallFrame {
            name: Name::EMPTY,
            call_span: None,
        };
        assert!(stack.push(frame).is_ok());
        assert!(stack.push(frame).is_ok());
        let err = stack.push(frame).err().map(|e| e.kind);
        assert_eq!(err, Some(EvalErrorKind::StackOverflow { depth: 2 }));
        assert_eq!(stack.depth(), 2);
        stack.pop();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn capture_lists_innermost_first() {
        let interner = StringInterner::new();
        let mut stack = CallStack::new(8);
        for (name, start) in [("outer", 0), ("inner", 10)] {
            let pushed = stack.push(CallFrame {
                name: interner.intern(name),
                call_span: Some(Span::new(start, start + 3)),
            });
            assert!(pushed.is_ok());
        }
        let _ = stack.push(CallFrame {
            name: Name::EMPTY,
            call_span: None,
        });

        let names: Vec<String> = stack
            .capture(&interner)
            .frames()
            .iter()
            .map(|frame| frame.name.clone())
            .collect();
        assert_eq!(names, vec!["<lambda>", "inner", "outer"]);
    }

    #[test]
    fn empty_stack_attaches_nothing() {
        let interner = StringInterner::new();
        let stack = CallStack::new(4);
        let err = stack.attach_backtrace(EvalError::new("x"), &interner);
        assert!(err.backtrace.is_none());
    }
}

#![deny(warnings)]

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];

/// Backtracking scanner over any iterator. Items are pulled lazily into a
/// buffer so callers can look ahead, rewind to a saved position and finally
/// `extract` everything consumed since the last `ignore`.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill();
        let blen = self.buf.len() as isize;
        if self.pos > blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until self.pos is backed by the buffer
    fn fill(&mut self) {
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// True when there is nothing left to read after the current position.
    pub fn exhausted(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Items consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    /// Drop everything consumed so far, the next item becomes the start.
    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf.drain(..n);
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if any.contains(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, curr() is left on the last skipped item
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    // Advance until an item in the 'any' set (or EOF) is next in line
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Skip and discard blanks so the next token starts fresh.
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }
}

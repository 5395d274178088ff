use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// Domain prefixes fixed by the execution environment's tree-hash rule.
const ATOM_PREFIX: u8 = 0x01;
const PAIR_PREFIX: u8 = 0x02;

// Operator tag marking a curried application, `(a . (function . args))`.
const CURRY_OP: &[u8] = b"a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree {
    Atom(Vec<u8>),
    Pair(Box<Tree>, Box<Tree>),
}

impl Tree {
    pub fn nil() -> Self {
        Tree::Atom(Vec::new())
    }

    pub fn atom(bytes: impl AsRef<[u8]>) -> Self {
        Tree::Atom(bytes.as_ref().to_vec())
    }

    pub fn pair(first: Tree, rest: Tree) -> Self {
        Tree::Pair(Box::new(first), Box::new(rest))
    }

    // Right-nested pairs terminated by the nil atom.
    pub fn list(items: impl IntoIterator<Item = Tree>) -> Self {
        let items: Vec<Tree> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Tree::nil(), |rest, item| Tree::pair(item, rest))
    }

    pub fn int(value: i128) -> Self {
        Tree::Atom(int_atom(value))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Tree::Atom(bytes) if bytes.is_empty())
    }

    pub fn as_atom(&self) -> Option<&[u8]> {
        match self {
            Tree::Atom(bytes) => Some(bytes),
            Tree::Pair(..) => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&Tree, &Tree)> {
        match self {
            Tree::Atom(_) => None,
            Tree::Pair(first, rest) => Some((first, rest)),
        }
    }

    // The elements of a nil-terminated list, or None if the tree is not one.
    pub fn list_items(&self) -> Option<Vec<&Tree>> {
        let mut items = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                Tree::Atom(_) if cursor.is_nil() => return Some(items),
                Tree::Atom(_) => return None,
                Tree::Pair(first, rest) => {
                    items.push(first.as_ref());
                    cursor = rest;
                }
            }
        }
    }

    pub fn hash(&self) -> [u8; 32] {
        match self {
            Tree::Atom(bytes) => atom_hash(bytes),
            Tree::Pair(first, rest) => pair_hash(first.hash(), rest.hash()),
        }
    }

    // Atoms whose bytes equal one of `literals` are taken as already-computed
    // hashes and substituted directly instead of being rehashed.
    pub fn hash_with_escapes(&self, literals: &[[u8; 32]]) -> [u8; 32] {
        match self {
            Tree::Atom(bytes) => match literals.iter().find(|lit| lit.as_slice() == bytes.as_slice()) {
                Some(lit) => *lit,
                None => atom_hash(bytes),
            },
            Tree::Pair(first, rest) => pair_hash(
                first.hash_with_escapes(literals),
                rest.hash_with_escapes(literals),
            ),
        }
    }
}

pub fn atom_hash(atom: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([ATOM_PREFIX]);
    hasher.update(atom);
    hasher.finalize().into()
}

pub fn pair_hash(first: impl AsRef<[u8]>, rest: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([PAIR_PREFIX]);
    hasher.update(first);
    hasher.update(rest);
    hasher.finalize().into()
}

pub fn curry(function: Tree, args: impl IntoIterator<Item = Tree>) -> Tree {
    Tree::pair(Tree::atom(CURRY_OP), Tree::pair(function, Tree::list(args)))
}

// Minimal two's-complement big-endian integer atom. Zero is the empty atom;
// no redundant leading 0x00 or 0xff byte is kept.
pub fn int_atom(value: i128) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start + 1 < bytes.len() {
        match (bytes[start], bytes[start + 1] & 0x80 != 0) {
            (0x00, false) | (0xff, true) => start += 1,
            _ => break,
        }
    }
    bytes[start..].to_vec()
}

pub fn decode_int(atom: &[u8]) -> i128 {
    assert!(atom.len() <= 16, "integer atom wider than 128 bits");
    let mut buf = if atom.first().is_some_and(|b| b & 0x80 != 0) {
        [0xffu8; 16]
    } else {
        [0x00u8; 16]
    };
    buf[16 - atom.len()..].copy_from_slice(atom);
    i128::from_be_bytes(buf)
}

use md5::Md5;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha256,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checksum algorithm {name:?}")]
pub struct UnknownChecksumAlgorithm {
    pub name: String,
}

impl ChecksumAlgorithm {
    pub fn from_name(name: &str) -> Result<Self, UnknownChecksumAlgorithm> {
        match name {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            _ => Err(UnknownChecksumAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    pub fn digest_hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 16,
        }
    }
}

pub fn validate_line_checksum(line: &str, index: u64) -> bool {
    validate_line_checksum_with(ChecksumAlgorithm::Sha256, line, index)
}

pub fn validate_line_checksum_with(algorithm: ChecksumAlgorithm, line: &str, index: u64) -> bool {
    let (prefix, embedded) = match line.rsplit_once('|') {
        Some((prefix, embedded)) => (prefix, embedded),
        None => ("", line),
    };
    // The ordinal replaces the digest field before hashing, salting every
    // line with its position in the source stream.
    let salted = format!("{prefix}|{index}");
    let computed = match algorithm {
        ChecksumAlgorithm::Md5 => {
            let digest = Md5::digest(salted.as_bytes());
            format!("{digest:x}")
        }
        ChecksumAlgorithm::Sha256 => {
            let digest = Sha256::digest(salted.as_bytes());
            format!("{digest:x}")
        }
    };
    computed[..algorithm.digest_hex_len()] == *embedded
}

#[cfg(test)]
#[path = "checksum_test.rs"]
mod tests;

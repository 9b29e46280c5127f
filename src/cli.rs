use clap::Parser;

use crate::types::Acl;

/// bucket-drop - stores a file in an S3 bucket
///
/// Options left out fall back to the environment: AWS_ACCESS_KEY_ID,
/// AWS_SECRET_ACCESS_KEY, AWS_REGION, S3_ENDPOINT and S3_PATH_STYLE.
#[derive(Debug, Default, Parser)]
#[command(
    name = "bucket-drop",
    version,
    about,
    long_about = None,
    override_usage = "bucket-drop -k [access key id] -s [secret access key] -b [bucketname] -n [keyname] -f [file]"
)]
pub struct Cli {
    /// Access key id (defaults to AWS_ACCESS_KEY_ID)
    #[arg(short = 'k', long = "aws_access_key_id", value_name = "KEY")]
    pub access_key_id: Option<String>,

    /// Secret access key (defaults to AWS_SECRET_ACCESS_KEY)
    #[arg(short = 's', long = "aws_secret_access_key", value_name = "SECRET")]
    pub secret_access_key: Option<String>,

    /// Local file to upload
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: Option<String>,

    /// Destination bucket
    #[arg(short = 'b', long = "bucketname", value_name = "BUCKET")]
    pub bucket_name: Option<String>,

    /// Destination object key
    #[arg(short = 'n', long = "keyname", value_name = "KEY")]
    pub key_name: Option<String>,

    /// Canned ACL applied to the object
    #[arg(short = 'a', long, value_enum, default_value_t = Acl::Private)]
    pub acl: Acl,

    /// Extra request header, repeatable
    #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Bucket region (defaults to AWS_REGION, then us-east-1)
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// S3-compatible endpoint URL (defaults to S3_ENDPOINT)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long)]
    pub path_style: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = Cli::try_parse_from([
            "bucket-drop", "-k", "id", "-s", "secret", "-f", "a.png", "-b", "media", "-n", "a.png",
            "-a", "public-read",
        ])
        .unwrap();
        let long = Cli::try_parse_from([
            "bucket-drop",
            "--aws_access_key_id",
            "id",
            "--aws_secret_access_key",
            "secret",
            "--filename",
            "a.png",
            "--bucketname",
            "media",
            "--keyname",
            "a.png",
            "--acl",
            "public-read",
        ])
        .unwrap();

        for cli in [short, long] {
            assert_eq!(cli.access_key_id.as_deref(), Some("id"));
            assert_eq!(cli.secret_access_key.as_deref(), Some("secret"));
            assert_eq!(cli.filename.as_deref(), Some("a.png"));
            assert_eq!(cli.bucket_name.as_deref(), Some("media"));
            assert_eq!(cli.key_name.as_deref(), Some("a.png"));
            assert_eq!(cli.acl, Acl::PublicRead);
        }
    }

    #[test]
    fn test_acl_defaults_to_private() {
        let cli = Cli::try_parse_from(["bucket-drop"]).unwrap();
        assert_eq!(cli.acl, Acl::Private);
        assert!(cli.filename.is_none());
    }

    #[test]
    fn test_unknown_acl_rejected() {
        assert!(Cli::try_parse_from(["bucket-drop", "-a", "everyone"]).is_err());
    }

    #[test]
    fn test_repeated_headers() {
        let cli = Cli::try_parse_from([
            "bucket-drop",
            "-H",
            "Cache-Control:max-age=60",
            "--header",
            "x-amz-meta-owner:ops",
        ])
        .unwrap();
        assert_eq!(cli.headers.len(), 2);
    }
}

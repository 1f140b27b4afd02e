#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pipeline-audit binary.
#[macro_export]
macro_rules! pipeline_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pipeline-audit"))
    };
}

/// A pipeline that passes every check with the default configuration.
pub const CLEAN_PIPELINE: &str = r"pipeline {
    agent any
    parameters {
        choice(name: 'ENV', choices: ['dev1', 'mde', 'staging'], description: 'Target environment')
    }
    environment {
        RELEASE = 'web'
    }
    stages {
        stage('Configure') {
            steps {
                script {
                    switch (params.ENV) {
                        case 'dev1':
                            env.NAMESPACE = 'apps-dev1'
                            env.AWS_PROFILE = 'dev'
                            env.EKS_CLUSTER_NAME = 'eks-dev1'
                            env.ECR_REGISTRY = '111.dkr.ecr'
                            break
                        case 'mde':
                            env.NAMESPACE = 'apps-mde'
                            break
                        case 'staging':
                            env.NAMESPACE = 'apps-staging'
                            env.AWS_PROFILE = 'staging'
                            env.EKS_CLUSTER_NAME = 'eks-staging'
                            env.ECR_REGISTRY = '222.dkr.ecr'
                            break
                    }
                }
            }
        }
        stage('Build') {
            steps {
                script {
                    switch (params.ENV) {
                        case 'dev1':
                            break
                        case 'mde':
                            break
                        case 'staging':
                            break
                    }
                }
            }
        }
        stage('Deploy') {
            steps {
                script {
                    switch (params.ENV) {
                        case 'dev1':
                            break
                        case 'mde':
                            break
                        case 'staging':
                            break
                    }
                    sh 'helm upgrade ${RELEASE} -n ${env.NAMESPACE}'
                }
            }
        }
    }
}
";

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `Jenkinsfile` at the fixture root.
    pub fn create_pipeline(&self, content: &str) -> PathBuf {
        self.create_file("Jenkinsfile", content)
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".pipeline-audit.toml", content)
    }
}
